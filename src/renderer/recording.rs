//! In-memory surface that records every drawing call
//!
//! Used by unit tests to assert on issued primitives, and by the native
//! binary to run the engines without a browser.

use glam::Vec2;

use super::paint::{ColorStop, Paint, Rgb, Rgba};
use super::surface::Surface;
use crate::Viewport;

/// Owned copy of a [`Paint`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedPaint {
    Solid(Rgba),
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<ColorStop>,
    },
    Radial {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    },
}

impl From<&Paint<'_>> for RecordedPaint {
    fn from(paint: &Paint<'_>) -> Self {
        match *paint {
            Paint::Solid(color) => RecordedPaint::Solid(color),
            Paint::Linear(g) => RecordedPaint::Linear {
                from: g.from,
                to: g.to,
                stops: g.stops.to_vec(),
            },
            Paint::Radial(g) => RecordedPaint::Radial {
                center: g.center,
                inner_radius: g.inner_radius,
                outer_radius: g.outer_radius,
                stops: g.stops.to_vec(),
            },
        }
    }
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize(Viewport),
    Clear,
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: RecordedPaint,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        paint: RecordedPaint,
    },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    SetAlpha(f32),
    FillGlyph {
        glyph: String,
        size: f32,
        color: Rgb,
    },
}

/// Per-kind counts over a run of commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub commands: usize,
    pub solid_fills: usize,
    pub gradient_fills: usize,
    pub strokes: usize,
    pub glyphs: usize,
}

impl DrawStats {
    pub fn from_commands(commands: &[DrawCommand]) -> Self {
        let mut stats = Self {
            commands: commands.len(),
            ..Default::default()
        };
        for command in commands {
            match command {
                DrawCommand::FillCircle {
                    paint: RecordedPaint::Solid(_),
                    ..
                } => stats.solid_fills += 1,
                DrawCommand::FillCircle { .. } => stats.gradient_fills += 1,
                DrawCommand::StrokeLine { .. } => stats.strokes += 1,
                DrawCommand::FillGlyph { .. } => stats.glyphs += 1,
                _ => {}
            }
        }
        stats
    }
}

/// Surface that appends every call to a command list
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
    /// Current save/restore nesting depth
    depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded commands (keeps the viewport)
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands issued since the most recent `Clear`
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Counts for the most recent frame
    pub fn frame_stats(&self) -> DrawStats {
        DrawStats::from_commands(self.last_frame())
    }

    /// Number of circle fills using a solid color
    pub fn solid_fills(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::FillCircle {
                        paint: RecordedPaint::Solid(_),
                        ..
                    }
                )
            })
            .count()
    }

    /// Number of circle fills using a radial gradient
    pub fn radial_fills(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::FillCircle {
                        paint: RecordedPaint::Radial { .. },
                        ..
                    }
                )
            })
            .count()
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillGlyph { glyph, .. } => Some(glyph.as_str()),
            _ => None,
        })
    }

    /// True if every `save` has been matched by a `restore`
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.commands.push(DrawCommand::Resize(viewport));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.into(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint<'_>) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            paint: paint.into(),
        });
    }

    fn save(&mut self) {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetAlpha(alpha));
    }

    fn fill_glyph(&mut self, glyph: &str, size: f32, color: Rgb) {
        self.commands.push(DrawCommand::FillGlyph {
            glyph: glyph.to_owned(),
            size,
            color,
        });
    }
}
