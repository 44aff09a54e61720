//! Twinkling background stars

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Frame, Particle, SimRng};
use crate::Viewport;
use crate::renderer::{ColorStop, Paint, RadialGradient, Rgb, Rgba, Surface};

pub const MIN_BRIGHTNESS: f32 = 0.3;
pub const MAX_BRIGHTNESS: f32 = 1.0;

/// Stars above this radius get a glow halo
pub const GLOW_RADIUS_THRESHOLD: f32 = 1.5;

/// A star drifting slowly upward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Current alpha, always in [MIN_BRIGHTNESS, MAX_BRIGHTNESS]
    pub brightness: f32,
    pub twinkle_speed: f32,
    /// +1.0 brightening, -1.0 dimming
    pub twinkle_direction: f32,
}

impl Star {
    /// Step brightness, bouncing off the bounds
    fn twinkle(&mut self) {
        self.brightness += self.twinkle_speed * self.twinkle_direction;
        if self.brightness >= MAX_BRIGHTNESS {
            self.brightness = MAX_BRIGHTNESS;
            self.twinkle_direction = -1.0;
        } else if self.brightness <= MIN_BRIGHTNESS {
            self.brightness = MIN_BRIGHTNESS;
            self.twinkle_direction = 1.0;
        }
    }

    pub fn has_glow(&self) -> bool {
        self.radius > GLOW_RADIUS_THRESHOLD
    }
}

impl Particle for Star {
    fn spawn(viewport: Viewport, rng: &mut SimRng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * viewport.width,
                rng.random::<f32>() * viewport.height,
            ),
            radius: rng.random_range(0.5..2.5),
            speed: rng.random_range(0.1..0.6),
            brightness: rng.random_range(MIN_BRIGHTNESS..MAX_BRIGHTNESS),
            twinkle_speed: rng.random_range(0.005..0.025),
            twinkle_direction: 1.0,
        }
    }

    fn advance(&mut self, frame: &Frame, rng: &mut SimRng) {
        self.twinkle();

        self.pos.y -= self.speed * 0.5;
        if self.pos.y < 0.0 {
            // Re-enter from the bottom edge
            self.pos.y = frame.viewport.height;
            self.pos.x = rng.random::<f32>() * frame.viewport.width;
        }
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let alpha = self.brightness;
        surface.fill_circle(self.pos, self.radius, &Paint::Solid(Rgb::WHITE.with_alpha(alpha)));

        if self.has_glow() {
            let glow_radius = self.radius * 2.0;
            let stops = [
                ColorStop::new(0.0, Rgb::VIOLET.with_alpha(alpha * 0.3)),
                ColorStop::new(1.0, Rgba { rgb: Rgb::VIOLET, a: 0.0 }),
            ];
            let glow = Paint::Radial(RadialGradient {
                center: self.pos,
                inner_radius: 0.0,
                outer_radius: glow_radius,
                stops: &stops,
            });
            surface.fill_circle(self.pos, glow_radius, &glow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordedPaint, RecordingSurface};
    use crate::sim::seeded_rng;
    use proptest::prelude::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    fn star(radius: f32) -> Star {
        Star {
            pos: Vec2::new(100.0, 100.0),
            radius,
            speed: 0.4,
            brightness: 0.5,
            twinkle_speed: 0.02,
            twinkle_direction: 1.0,
        }
    }

    #[test]
    fn test_direction_flips_at_upper_bound() {
        let mut s = star(1.0);
        s.brightness = 0.99;
        s.advance(&Frame::new(VP, 0.0), &mut seeded_rng(1));
        assert_eq!(s.brightness, MAX_BRIGHTNESS);
        assert_eq!(s.twinkle_direction, -1.0);

        s.advance(&Frame::new(VP, 16.0), &mut seeded_rng(1));
        assert!((s.brightness - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_direction_flips_at_lower_bound() {
        let mut s = star(1.0);
        s.brightness = 0.31;
        s.twinkle_direction = -1.0;
        s.advance(&Frame::new(VP, 0.0), &mut seeded_rng(1));
        assert_eq!(s.brightness, MIN_BRIGHTNESS);
        assert_eq!(s.twinkle_direction, 1.0);
    }

    #[test]
    fn test_wraps_to_bottom_with_new_x() {
        let mut s = star(1.0);
        s.pos.y = 0.1;
        s.advance(&Frame::new(VP, 0.0), &mut seeded_rng(3));
        assert_eq!(s.pos.y, VP.height);
        assert!(s.pos.x >= 0.0 && s.pos.x < VP.width);
    }

    #[test]
    fn test_large_star_draws_fill_and_glow() {
        let mut s = star(2.0);
        let mut rng = seeded_rng(42);
        let mut surface = RecordingSurface::new();
        s.advance(&Frame::new(VP, 0.0), &mut rng);
        s.render(&mut surface);

        assert_eq!(surface.solid_fills(), 1);
        assert_eq!(surface.radial_fills(), 1);
        match &surface.commands[1] {
            DrawCommand::FillCircle {
                radius,
                paint: RecordedPaint::Radial { stops, outer_radius, .. },
                ..
            } => {
                assert_eq!(*radius, 4.0);
                assert_eq!(*outer_radius, 4.0);
                assert!((stops[0].color.a - s.brightness * 0.3).abs() < 1e-6);
                assert_eq!(stops[1].color.a, 0.0);
            }
            other => panic!("expected glow fill, got {:?}", other),
        }
    }

    #[test]
    fn test_small_star_has_no_glow() {
        let s = star(1.5);
        let mut surface = RecordingSurface::new();
        s.render(&mut surface);
        assert_eq!(surface.solid_fills(), 1);
        assert_eq!(surface.radial_fills(), 0);
    }

    proptest! {
        #[test]
        fn prop_brightness_stays_in_bounds(seed in any::<u64>(), frames in 1usize..2000) {
            let mut rng = seeded_rng(seed);
            let mut s = Star::spawn(VP, &mut rng);
            for i in 0..frames {
                s.advance(&Frame::new(VP, i as f64 * 16.0), &mut rng);
                prop_assert!(s.brightness >= MIN_BRIGHTNESS && s.brightness <= MAX_BRIGHTNESS);
            }
        }
    }
}
