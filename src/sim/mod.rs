//! Particle simulation module
//!
//! Every entity kind implements [`Particle`]. Entities are plain values owned
//! by a [`Pool`]; `advance` only reads the entity itself plus the frame
//! context, `render` only issues drawing calls.
//! - Seeded RNG only (tests pin the seed)
//! - No platform dependencies

pub mod flower;
pub mod nebula;
pub mod pool;
pub mod shooting_star;
pub mod spark;
pub mod star;

pub use flower::Flower;
pub use nebula::NebulaCloud;
pub use pool::Pool;
pub use shooting_star::ShootingStar;
pub use spark::{Spark, emit_burst};
pub use star::Star;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::Viewport;
use crate::renderer::Surface;

/// RNG used for all entity spawning/resets
pub type SimRng = Pcg32;

/// Create the simulation RNG from a seed
pub fn seeded_rng(seed: u64) -> SimRng {
    Pcg32::seed_from_u64(seed)
}

/// Per-frame context handed to `advance`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Viewport at the start of this frame
    pub viewport: Viewport,
    /// Monotonic clock in milliseconds (animation frame timestamp)
    pub time_ms: f64,
}

impl Frame {
    pub fn new(viewport: Viewport, time_ms: f64) -> Self {
        Self { viewport, time_ms }
    }

    #[inline]
    pub fn time_secs(&self) -> f64 {
        self.time_ms / 1000.0
    }
}

/// Capability shared by every entity kind
pub trait Particle {
    /// Construct a fresh entity with randomized state
    fn spawn(viewport: Viewport, rng: &mut SimRng) -> Self
    where
        Self: Sized;

    /// Step one frame. May reset the entity (drawing from `rng`).
    fn advance(&mut self, frame: &Frame, rng: &mut SimRng);

    /// Issue drawing calls for the current state
    fn render<S: Surface + ?Sized>(&self, surface: &mut S);
}
