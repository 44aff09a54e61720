//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/seeding
//! - Canvas lookup and the animation frame loop
//! - Resize and hover event subscriptions

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{init_logging, start_all, start_flower_rain, start_galaxy, start_sparks, stop_all};

/// Milliseconds since the Unix epoch, used to seed engines without a configured seed
#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
