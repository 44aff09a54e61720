//! Immediate-mode 2D drawing surface

use glam::Vec2;

use super::paint::{Paint, Rgb};
use crate::Viewport;

/// A persistent raster the engines repaint every frame.
///
/// Calls mirror Canvas2D: transforms (`translate`, `rotate`) and `set_alpha`
/// accumulate until the matching `restore`.
pub trait Surface {
    /// Match the backing store to the viewport (clears on Canvas2D)
    fn resize(&mut self, viewport: Viewport);

    /// Clear the whole surface to transparent
    fn clear(&mut self);

    /// Fill a full circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>);

    /// Stroke a straight line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint<'_>);

    /// Push the current transform and alpha
    fn save(&mut self);

    /// Pop the transform and alpha pushed by the last `save`
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);

    /// Rotate by `angle` radians around the current origin
    fn rotate(&mut self, angle: f32);

    /// Global alpha multiplier for subsequent draws
    fn set_alpha(&mut self, alpha: f32);

    /// Draw a text glyph of `size` px centered on the current origin
    fn fill_glyph(&mut self, glyph: &str, size: f32, color: Rgb);
}
