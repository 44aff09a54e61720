//! Rendering module
//!
//! Entities draw through the [`Surface`] trait, an immediate-mode 2D API
//! shaped after Canvas2D. The browser adapter lives in `canvas`; the
//! recording surface backs tests and headless runs.

pub mod paint;
pub mod recording;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use paint::{ColorStop, LinearGradient, Paint, RadialGradient, Rgb, Rgba};
pub use recording::{DrawCommand, DrawStats, RecordedPaint, RecordingSurface};
pub use surface::Surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
