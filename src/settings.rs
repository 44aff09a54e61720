//! Engine settings
//!
//! Persisted in LocalStorage as JSON; any missing field takes its default.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Pool sizes, RNG seed and resize policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Galaxy ===
    pub star_count: usize,
    pub nebula_count: usize,
    /// Created once; not rebuilt on resize unless `rebuild_all_on_resize`
    pub shooting_star_count: usize,

    // === Overlays ===
    pub flower_count: usize,
    pub sparks_per_burst: usize,
    /// Emit sparks when the pointer enters buttons and cards
    pub hover_sparks: bool,

    // === Behavior ===
    /// Also rebuild shooting stars and flowers on resize
    pub rebuild_all_on_resize: bool,
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            nebula_count: NEBULA_COUNT,
            shooting_star_count: SHOOTING_STAR_COUNT,

            flower_count: FLOWER_COUNT,
            sparks_per_burst: SPARKS_PER_BURST,
            hover_sparks: true,

            rebuild_all_on_resize: false,
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "starfall_settings";

    /// Parse settings JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::info!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Seed for an engine: the configured seed, else `fallback`.
    ///
    /// `salt` keeps engines sharing one configured seed from mirroring each other.
    pub fn seed_or(&self, fallback: u64, salt: u64) -> u64 {
        self.seed.unwrap_or(fallback).wrapping_add(salt)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
