//! Falling flower petals for the overlay canvas

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::{Frame, Particle, SimRng};
use crate::Viewport;
use crate::renderer::{Rgb, Surface};

pub const FLOWER_GLYPHS: [&str; 6] = ["🌸", "🌺", "🌼", "🌷", "💮", "🏵️"];

/// Fallback tints for fonts that render the glyphs monochrome
pub const FLOWER_PALETTE: [Rgb; 5] = [
    Rgb::new(255, 183, 197),
    Rgb::new(255, 105, 180),
    Rgb::new(255, 218, 121),
    Rgb::new(216, 180, 254),
    Rgb::new(251, 207, 232),
];

/// Flowers respawn at this y
pub const SPAWN_Y: f32 = -50.0;
/// Distance below the bottom edge that counts as off-screen
pub const EXIT_MARGIN: f32 = 50.0;
/// Fraction of the viewport height after which flowers fade
pub const FADE_START: f32 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    /// Drawn position (x includes sway)
    pub pos: Vec2,
    /// Horizontal center the sway oscillates around
    pub base_x: f32,
    /// Glyph size in px
    pub size: f32,
    /// Pixels per frame
    pub speed: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub opacity: f32,
    pub fade_rate: f32,
    pub sway_amplitude: f32,
    /// Radians per second
    pub sway_speed: f32,
    pub sway_phase: f32,
    /// Index into FLOWER_GLYPHS
    pub glyph: usize,
    /// Index into FLOWER_PALETTE
    pub color: usize,
}

impl Flower {
    /// Fresh random state entering just above the top edge
    pub fn reset(viewport: Viewport, rng: &mut SimRng) -> Self {
        let base_x = rng.random::<f32>() * viewport.width;
        Self {
            pos: Vec2::new(base_x, SPAWN_Y),
            base_x,
            size: rng.random_range(16.0..32.0),
            speed: rng.random_range(0.5..1.5),
            rotation: rng.random::<f32>() * TAU,
            rotation_speed: rng.random_range(-0.02..0.02),
            opacity: 1.0,
            fade_rate: rng.random_range(0.005..0.015),
            sway_amplitude: rng.random_range(15.0..45.0),
            sway_speed: rng.random_range(0.4..1.2),
            sway_phase: rng.random::<f32>() * TAU,
            glyph: rng.random_range(0..FLOWER_GLYPHS.len()),
            color: rng.random_range(0..FLOWER_PALETTE.len()),
        }
    }

    pub fn glyph(&self) -> &'static str {
        FLOWER_GLYPHS[self.glyph]
    }

    pub fn tint(&self) -> Rgb {
        FLOWER_PALETTE[self.color]
    }

    /// y at which fading begins for the given viewport
    #[inline]
    pub fn fade_line(viewport: Viewport) -> f32 {
        viewport.height * FADE_START
    }

    fn is_spent(&self, viewport: Viewport) -> bool {
        self.pos.y > viewport.height + EXIT_MARGIN || self.opacity <= 0.0
    }
}

impl Particle for Flower {
    /// Initial pools are lifted a random extra distance above the top edge
    /// so the first flowers do not arrive as a single row.
    fn spawn(viewport: Viewport, rng: &mut SimRng) -> Self {
        let mut flower = Self::reset(viewport, rng);
        flower.pos.y -= rng.random::<f32>() * viewport.height;
        flower
    }

    fn advance(&mut self, frame: &Frame, rng: &mut SimRng) {
        self.pos.y += self.speed;
        self.rotation += self.rotation_speed;

        // Sway follows the clock, not the frame count
        let swing = (frame.time_secs() * self.sway_speed as f64 + self.sway_phase as f64).sin();
        self.pos.x = self.base_x + swing as f32 * self.sway_amplitude;

        if self.pos.y > Self::fade_line(frame.viewport) {
            self.opacity -= self.fade_rate;
        } else {
            self.opacity = 1.0;
        }

        if self.is_spent(frame.viewport) {
            *self = Self::reset(frame.viewport, rng);
        }
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.save();
        surface.translate(self.pos);
        surface.rotate(self.rotation);
        surface.set_alpha(self.opacity.max(0.0));
        surface.fill_glyph(self.glyph(), self.size, self.tint());
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::sim::seeded_rng;

    const VP: Viewport = Viewport::new(800.0, 1000.0);

    fn flower_at(y: f32) -> Flower {
        let mut f = Flower::reset(VP, &mut seeded_rng(3));
        f.pos.y = y;
        f
    }

    #[test]
    fn test_opaque_above_fade_line() {
        let mut f = flower_at(0.0);
        let mut rng = seeded_rng(1);
        let mut t = 0.0;
        while f.pos.y + f.speed <= Flower::fade_line(VP) {
            f.advance(&Frame::new(VP, t), &mut rng);
            assert_eq!(f.opacity, 1.0);
            t += 16.0;
        }
    }

    #[test]
    fn test_opacity_strictly_decreases_below_fade_line() {
        let mut f = flower_at(Flower::fade_line(VP) + 1.0);
        let mut rng = seeded_rng(1);
        let mut last = f.opacity;
        for i in 0..20 {
            f.advance(&Frame::new(VP, i as f64 * 16.0), &mut rng);
            assert!(f.opacity < last);
            last = f.opacity;
        }
    }

    #[test]
    fn test_fully_faded_flower_resets() {
        let mut f = flower_at(Flower::fade_line(VP) + 10.0);
        f.opacity = 0.0;
        f.rotation = 123.0;
        f.fade_rate = 0.5;
        f.advance(&Frame::new(VP, 0.0), &mut seeded_rng(8));

        assert_eq!(f.pos.y, SPAWN_Y);
        assert_eq!(f.opacity, 1.0);
        assert!(f.rotation >= 0.0 && f.rotation < TAU);
        assert!((0.005..0.015).contains(&f.fade_rate));
        assert!(f.glyph < FLOWER_GLYPHS.len());
    }

    #[test]
    fn test_offscreen_flower_resets_on_next_advance() {
        let mut f = flower_at(VP.height + 51.0);
        f.advance(&Frame::new(VP, 500.0), &mut seeded_rng(21));
        assert_eq!(f.pos.y, SPAWN_Y);
        assert!(FLOWER_GLYPHS.contains(&f.glyph()));
    }

    #[test]
    fn test_sway_depends_on_clock_not_frames() {
        let mut a = flower_at(0.0);
        let mut b = a.clone();
        let mut rng = seeded_rng(1);
        // Same timestamp, different number of frames
        a.advance(&Frame::new(VP, 2000.0), &mut rng);
        b.advance(&Frame::new(VP, 1000.0), &mut rng);
        b.advance(&Frame::new(VP, 2000.0), &mut rng);
        assert!((a.pos.x - b.pos.x).abs() < 1e-4);
        assert!((a.pos.x - a.base_x).abs() <= a.sway_amplitude);
    }

    #[test]
    fn test_initial_spawn_starts_above_viewport() {
        let mut rng = seeded_rng(77);
        for _ in 0..50 {
            let f = Flower::spawn(VP, &mut rng);
            assert!(f.pos.y <= SPAWN_Y);
            assert!(f.pos.y > SPAWN_Y - VP.height);
        }
    }

    #[test]
    fn test_render_wraps_transform_in_save_restore() {
        let f = flower_at(100.0);
        let mut surface = RecordingSurface::new();
        f.render(&mut surface);
        assert_eq!(surface.commands.first(), Some(&DrawCommand::Save));
        assert_eq!(surface.commands.last(), Some(&DrawCommand::Restore));
        assert!(surface.is_balanced());
        assert_eq!(surface.glyphs().collect::<Vec<_>>(), vec![f.glyph()]);
    }
}
