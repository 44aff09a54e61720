//! Animation engines
//!
//! A [`Scene`] groups the pools drawn onto one canvas; a
//! [`SurfaceController`] owns the surface, the scene and the RNG and runs
//! the clear -> advance -> render loop one frame at a time.

pub mod controller;
pub mod flower_rain;
pub mod galaxy;
pub mod sparks;

pub use controller::{LoopState, SurfaceController};
pub use flower_rain::FlowerRainScene;
pub use galaxy::GalaxyScene;
pub use sparks::SparkScene;

use std::cell::Cell;
use std::rc::Rc;

use crate::Viewport;
use crate::renderer::Surface;
use crate::sim::{Frame, SimRng};

/// The ordered set of pools one surface draws
pub trait Scene {
    /// Short name for log lines
    fn name(&self) -> &'static str;

    /// Build every pool for the initial viewport
    fn build(&mut self, viewport: Viewport, rng: &mut SimRng);

    /// Rebuild whichever pools depend on the viewport size
    fn resize(&mut self, viewport: Viewport, rng: &mut SimRng);

    /// Advance and render every entity, background-most pool first
    fn step<S: Surface + ?Sized>(&mut self, frame: &Frame, rng: &mut SimRng, surface: &mut S);

    /// Total live entities across all pools
    fn entity_count(&self) -> usize;

    /// The loop has stopped for good; release anything still queued
    fn halt(&mut self) {}
}

/// Shared flag that stops a frame loop from rescheduling
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Drive up to `frames` frames with a synthetic clock.
///
/// Returns the number of frames actually run; fewer than requested means the
/// controller was stopped or cancelled along the way.
pub fn run_frames<S: Surface, C: Scene>(
    controller: &mut SurfaceController<S, C>,
    frames: u64,
    start_ms: f64,
    frame_ms: f64,
) -> u64 {
    let mut ran = 0;
    for i in 0..frames {
        if !controller.frame(start_ms + i as f64 * frame_ms) {
            break;
        }
        ran += 1;
    }
    ran
}
