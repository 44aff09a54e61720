//! Galaxy background: nebula clouds, stars and shooting stars

use super::Scene;
use crate::Settings;
use crate::Viewport;
use crate::renderer::Surface;
use crate::sim::{Frame, NebulaCloud, Pool, ShootingStar, SimRng, Star};

#[derive(Debug, Clone, Default)]
pub struct GalaxyScene {
    pub nebula: Pool<NebulaCloud>,
    pub stars: Pool<Star>,
    pub shooting_stars: Pool<ShootingStar>,
    star_count: usize,
    nebula_count: usize,
    shooting_star_count: usize,
    rebuild_all_on_resize: bool,
}

impl GalaxyScene {
    pub fn new(settings: &Settings) -> Self {
        Self {
            star_count: settings.star_count,
            nebula_count: settings.nebula_count,
            shooting_star_count: settings.shooting_star_count,
            rebuild_all_on_resize: settings.rebuild_all_on_resize,
            ..Default::default()
        }
    }
}

impl Scene for GalaxyScene {
    fn name(&self) -> &'static str {
        "galaxy"
    }

    fn build(&mut self, viewport: Viewport, rng: &mut SimRng) {
        self.stars.initialize(self.star_count, viewport, rng);
        self.nebula.initialize(self.nebula_count, viewport, rng);
        self.shooting_stars
            .initialize(self.shooting_star_count, viewport, rng);
    }

    /// Stars and nebula are laid out over the viewport and are rebuilt.
    /// Shooting stars keep flying and pick up the new bounds from the frame.
    fn resize(&mut self, viewport: Viewport, rng: &mut SimRng) {
        self.stars.initialize(self.star_count, viewport, rng);
        self.nebula.initialize(self.nebula_count, viewport, rng);
        if self.rebuild_all_on_resize {
            self.shooting_stars
                .initialize(self.shooting_star_count, viewport, rng);
        }
    }

    fn step<S: Surface + ?Sized>(&mut self, frame: &Frame, rng: &mut SimRng, surface: &mut S) {
        self.nebula.step(frame, rng, surface);
        self.stars.step(frame, rng, surface);
        self.shooting_stars.step(frame, rng, surface);
    }

    fn entity_count(&self) -> usize {
        self.stars.len() + self.nebula.len() + self.shooting_stars.len()
    }
}
