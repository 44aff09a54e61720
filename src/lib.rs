//! Starfall - ambient canvas animations for a portfolio page
//!
//! Core modules:
//! - `sim`: Particle entities and fixed-size pools (stars, nebula, shooting stars, flowers, sparks)
//! - `renderer`: Drawing surface abstraction, Canvas2D adapter and a recording surface
//! - `engine`: Scenes and the per-canvas surface controller that runs the frame loop
//! - `platform`: Browser glue (canvas lookup, animation frames, resize/hover events)
//! - `settings`: Pool sizes, seed and resize policy

pub mod engine;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::{CancelToken, FlowerRainScene, GalaxyScene, Scene, SparkScene, SurfaceController};
pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Engine configuration constants
pub mod consts {
    /// Default pool sizes
    pub const STAR_COUNT: usize = 300;
    pub const NEBULA_COUNT: usize = 5;
    pub const SHOOTING_STAR_COUNT: usize = 3;
    pub const FLOWER_COUNT: usize = 25;
    pub const SPARKS_PER_BURST: usize = 5;

    /// Nominal frame interval used by the headless driver (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Canvas element ids
    pub const GALAXY_CANVAS_ID: &str = "galaxy-canvas";
    pub const FLOWER_CANVAS_ID: &str = "flower-canvas";
    pub const SPARK_CANVAS_ID: &str = "spark-canvas";

    /// Elements that emit sparks on pointer enter
    pub const SPARK_TARGETS: &str = ".btn, .project-card, .skill-card";
}

/// Size of the drawing surface in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if the point lies inside [0, width] x [0, height]
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
