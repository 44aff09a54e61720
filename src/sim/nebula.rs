//! Drifting nebula clouds

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Frame, Particle, SimRng};
use crate::Viewport;
use crate::renderer::{ColorStop, Paint, RadialGradient, Rgb, Rgba, Surface};

/// Cloud tints: purple, cyan, pink, indigo, teal
pub const NEBULA_PALETTE: [Rgb; 5] = [
    Rgb::new(124, 58, 237),
    Rgb::new(6, 182, 212),
    Rgb::new(244, 114, 182),
    Rgb::new(99, 102, 241),
    Rgb::new(45, 212, 191),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NebulaCloud {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub vel: Vec2,
    pub opacity: f32,
}

/// Wrap one axis: more than 2r past an edge teleports to r past the other
#[inline]
fn wrap_axis(v: f32, radius: f32, extent: f32) -> f32 {
    if v < -radius * 2.0 {
        extent + radius
    } else if v > extent + radius * 2.0 {
        -radius
    } else {
        v
    }
}

impl Particle for NebulaCloud {
    fn spawn(viewport: Viewport, rng: &mut SimRng) -> Self {
        Self {
            pos: Vec2::new(
                rng.random::<f32>() * viewport.width,
                rng.random::<f32>() * viewport.height,
            ),
            radius: rng.random_range(100.0..300.0),
            color: NEBULA_PALETTE[rng.random_range(0..NEBULA_PALETTE.len())],
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * 0.2,
                (rng.random::<f32>() - 0.5) * 0.1,
            ),
            opacity: rng.random_range(0.05..0.2),
        }
    }

    fn advance(&mut self, frame: &Frame, _rng: &mut SimRng) {
        self.pos += self.vel;
        self.pos.x = wrap_axis(self.pos.x, self.radius, frame.viewport.width);
        self.pos.y = wrap_axis(self.pos.y, self.radius, frame.viewport.height);
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let stops = [
            ColorStop::new(0.0, self.color.with_alpha(self.opacity)),
            ColorStop::new(0.5, self.color.with_alpha(self.opacity * 0.5)),
            ColorStop::new(1.0, Rgba::TRANSPARENT),
        ];
        let paint = Paint::Radial(RadialGradient {
            center: self.pos,
            inner_radius: 0.0,
            outer_radius: self.radius,
            stops: &stops,
        });
        surface.fill_circle(self.pos, self.radius, &paint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordedPaint, RecordingSurface};
    use crate::sim::seeded_rng;
    use proptest::prelude::*;

    const VP: Viewport = Viewport::new(1024.0, 768.0);

    fn cloud(pos: Vec2, vel: Vec2) -> NebulaCloud {
        NebulaCloud {
            pos,
            radius: 100.0,
            color: NEBULA_PALETTE[1],
            vel,
            opacity: 0.1,
        }
    }

    #[test]
    fn test_wraps_left_to_right() {
        let mut c = cloud(Vec2::new(-199.95, 300.0), Vec2::new(-0.1, 0.0));
        c.advance(&Frame::new(VP, 0.0), &mut seeded_rng(1));
        assert_eq!(c.pos.x, VP.width + 100.0);
        assert_eq!(c.pos.y, 300.0);
    }

    #[test]
    fn test_wraps_bottom_to_top() {
        let mut c = cloud(Vec2::new(500.0, VP.height + 199.98), Vec2::new(0.0, 0.05));
        c.advance(&Frame::new(VP, 0.0), &mut seeded_rng(1));
        assert_eq!(c.pos.y, -100.0);
    }

    #[test]
    fn test_no_wrap_inside_margin() {
        let mut c = cloud(Vec2::new(-150.0, -150.0), Vec2::new(-0.1, -0.05));
        c.advance(&Frame::new(VP, 0.0), &mut seeded_rng(1));
        assert!((c.pos.x + 150.1).abs() < 1e-3);
        assert!((c.pos.y + 150.05).abs() < 1e-3);
    }

    #[test]
    fn test_render_three_stop_gradient() {
        let c = cloud(Vec2::new(10.0, 20.0), Vec2::ZERO);
        let mut surface = RecordingSurface::new();
        c.render(&mut surface);
        match &surface.commands[0] {
            DrawCommand::FillCircle {
                paint: RecordedPaint::Radial { stops, .. },
                radius,
                ..
            } => {
                assert_eq!(*radius, 100.0);
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[0].color.a, 0.1);
                assert_eq!(stops[1].color.a, 0.05);
                assert_eq!(stops[2].color, Rgba::TRANSPARENT);
            }
            other => panic!("expected radial fill, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_stays_within_wrap_margin(seed in any::<u64>(), frames in 1usize..5000) {
            let mut rng = seeded_rng(seed);
            let mut c = NebulaCloud::spawn(VP, &mut rng);
            // Exaggerate drift so edges are actually crossed
            c.vel *= 400.0;
            for i in 0..frames {
                c.advance(&Frame::new(VP, i as f64), &mut rng);
                let margin = c.radius * 2.0;
                prop_assert!(c.pos.x >= -margin && c.pos.x <= VP.width + margin);
                prop_assert!(c.pos.y >= -margin && c.pos.y <= VP.height + margin);
            }
        }
    }
}
