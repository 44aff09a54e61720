//! Occasional shooting stars
//!
//! Each star waits out a frame delay, streaks diagonally across the
//! viewport, then re-arms with fresh random state once it leaves.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;

use super::{Frame, Particle, SimRng};
use crate::Viewport;
use crate::renderer::{ColorStop, LinearGradient, Paint, Rgb, Surface};

pub const TRAIL_WIDTH: f32 = 2.0;
pub const HEAD_RADIUS: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShootingStar {
    /// Head position
    pub pos: Vec2,
    /// Trail length in pixels
    pub length: f32,
    /// Pixels per frame
    pub speed: f32,
    /// Travel angle (radians, ~45° downward-right)
    pub angle: f32,
    pub opacity: f32,
    pub active: bool,
    /// Frames left before activation
    pub delay: u32,
}

impl ShootingStar {
    /// Unit travel direction
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    pub fn tail(&self) -> Vec2 {
        self.pos - self.direction() * self.length
    }
}

impl Particle for ShootingStar {
    fn spawn(viewport: Viewport, rng: &mut SimRng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * viewport.width,
                rng.random::<f32>() * viewport.height * 0.5,
            ),
            length: rng.random_range(40.0..120.0),
            speed: rng.random_range(10.0..25.0),
            angle: FRAC_PI_4 + (rng.random::<f32>() - 0.5) * 0.5,
            opacity: 0.0,
            active: false,
            delay: rng.random_range(200..700),
        }
    }

    fn advance(&mut self, frame: &Frame, rng: &mut SimRng) {
        if !self.active {
            self.delay = self.delay.saturating_sub(1);
            if self.delay == 0 {
                self.active = true;
                self.opacity = 1.0;
            }
            return;
        }

        self.pos += self.direction() * self.speed;

        if !frame.viewport.contains(self.pos.x, self.pos.y) {
            *self = Self::spawn(frame.viewport, rng);
        }
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.active {
            return;
        }

        let stops = [
            ColorStop::new(0.0, Rgb::WHITE.with_alpha(0.0)),
            ColorStop::new(1.0, Rgb::WHITE.with_alpha(self.opacity)),
        ];
        let tail = self.tail();
        let trail = Paint::Linear(LinearGradient {
            from: tail,
            to: self.pos,
            stops: &stops,
        });
        surface.stroke_line(tail, self.pos, TRAIL_WIDTH, &trail);

        surface.fill_circle(
            self.pos,
            HEAD_RADIUS,
            &Paint::Solid(Rgb::WHITE.with_alpha(self.opacity)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::seeded_rng;

    const VP: Viewport = Viewport::new(1000.0, 800.0);

    fn armed(delay: u32) -> ShootingStar {
        ShootingStar {
            pos: Vec2::new(100.0, 100.0),
            length: 80.0,
            speed: 20.0,
            angle: FRAC_PI_4,
            opacity: 0.0,
            active: false,
            delay,
        }
    }

    #[test]
    fn test_zero_delay_activates_on_first_advance() {
        let mut s = armed(0);
        s.advance(&Frame::new(VP, 0.0), &mut seeded_rng(1));
        assert!(s.active);
        assert_eq!(s.opacity, 1.0);
        // Activation frame does not move the head
        assert_eq!(s.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_activates_after_exactly_delay_frames() {
        let mut rng = seeded_rng(5);
        for delay in [1u32, 2, 17, 250] {
            let mut s = armed(delay);
            for _ in 0..delay - 1 {
                s.advance(&Frame::new(VP, 0.0), &mut rng);
                assert!(!s.active, "active too early with delay {}", delay);
            }
            s.advance(&Frame::new(VP, 0.0), &mut rng);
            assert!(s.active, "not active after {} frames", delay);
        }
    }

    #[test]
    fn test_inactive_star_draws_nothing() {
        let s = armed(10);
        let mut surface = RecordingSurface::new();
        s.render(&mut surface);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_active_star_draws_trail_and_head() {
        let mut s = armed(0);
        s.advance(&Frame::new(VP, 0.0), &mut seeded_rng(1));
        let mut surface = RecordingSurface::new();
        s.render(&mut surface);

        assert_eq!(surface.commands.len(), 2);
        match &surface.commands[0] {
            DrawCommand::StrokeLine { from, to, width, .. } => {
                assert_eq!(*width, TRAIL_WIDTH);
                assert_eq!(*to, s.pos);
                assert!((from.distance(*to) - s.length).abs() < 1e-3);
            }
            other => panic!("expected trail, got {:?}", other),
        }
        assert_eq!(surface.solid_fills(), 1);
    }

    #[test]
    fn test_resets_after_leaving_viewport() {
        let mut rng = seeded_rng(11);
        let mut s = armed(0);
        s.pos = Vec2::new(VP.width - 1.0, 400.0);
        s.active = true;
        s.opacity = 1.0;
        s.advance(&Frame::new(VP, 0.0), &mut rng);

        assert!(!s.active);
        assert_eq!(s.opacity, 0.0);
        assert!((200..700).contains(&s.delay));
        assert!(s.pos.y < VP.height * 0.5);
        assert!((s.angle - FRAC_PI_4).abs() <= 0.25);
    }
}
