//! Flower rain overlay

use super::Scene;
use crate::Settings;
use crate::Viewport;
use crate::renderer::Surface;
use crate::sim::{Flower, Frame, Pool, SimRng};

#[derive(Debug, Clone, Default)]
pub struct FlowerRainScene {
    pub flowers: Pool<Flower>,
    flower_count: usize,
    rebuild_on_resize: bool,
}

impl FlowerRainScene {
    pub fn new(settings: &Settings) -> Self {
        Self {
            flowers: Pool::new(),
            flower_count: settings.flower_count,
            rebuild_on_resize: settings.rebuild_all_on_resize,
        }
    }
}

impl Scene for FlowerRainScene {
    fn name(&self) -> &'static str {
        "flower-rain"
    }

    fn build(&mut self, viewport: Viewport, rng: &mut SimRng) {
        self.flowers.initialize(self.flower_count, viewport, rng);
    }

    /// Flowers keep falling; only the surface size changes by default
    fn resize(&mut self, viewport: Viewport, rng: &mut SimRng) {
        if self.rebuild_on_resize {
            self.flowers.initialize(self.flower_count, viewport, rng);
        }
    }

    fn step<S: Surface + ?Sized>(&mut self, frame: &Frame, rng: &mut SimRng, surface: &mut S) {
        self.flowers.step(frame, rng, surface);
    }

    fn entity_count(&self) -> usize {
        self.flowers.len()
    }
}
