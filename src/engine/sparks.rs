//! Hover spark overlay
//!
//! Bursts requested between frames are queued and emitted at the start of
//! the next frame, so the spark list is never grown mid-iteration.

use glam::Vec2;

use super::Scene;
use crate::Settings;
use crate::Viewport;
use crate::renderer::Surface;
use crate::sim::{Frame, SimRng, Spark, emit_burst};

#[derive(Debug, Clone, Default)]
pub struct SparkScene {
    pub sparks: Vec<Spark>,
    queued: Vec<Vec2>,
    per_burst: usize,
    /// Set once the owning loop has stopped; bursts are dropped
    halted: bool,
}

impl SparkScene {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sparks: Vec::new(),
            queued: Vec::new(),
            per_burst: settings.sparks_per_burst,
            halted: false,
        }
    }

    /// Queue a burst centered at `center` (viewport coordinates).
    ///
    /// Ignored once the scene has been halted.
    pub fn emit(&mut self, center: Vec2) {
        if !self.halted {
            self.queued.push(center);
        }
    }

    pub fn queued_bursts(&self) -> usize {
        self.queued.len()
    }
}

impl Scene for SparkScene {
    fn name(&self) -> &'static str {
        "sparks"
    }

    fn build(&mut self, _viewport: Viewport, _rng: &mut SimRng) {
        self.sparks.clear();
        self.queued.clear();
        self.halted = false;
    }

    fn resize(&mut self, _viewport: Viewport, _rng: &mut SimRng) {}

    fn step<S: Surface + ?Sized>(&mut self, _frame: &Frame, rng: &mut SimRng, surface: &mut S) {
        for center in self.queued.drain(..) {
            emit_burst(&mut self.sparks, center, self.per_burst, rng);
        }

        for spark in &mut self.sparks {
            spark.advance();
            spark.render(surface);
        }
        self.sparks.retain(Spark::is_alive);
    }

    fn entity_count(&self) -> usize {
        self.sparks.len()
    }

    fn halt(&mut self) {
        self.halted = true;
        self.queued.clear();
        self.sparks.clear();
    }
}
