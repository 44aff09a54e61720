//! Short-lived hover sparks
//!
//! Unlike the other kinds, sparks are not pooled at a fixed size: bursts
//! append them and they are dropped once fully faded.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::SimRng;
use crate::lerp;
use crate::renderer::{Paint, Rgb, Surface};

pub const SPARK_RADIUS: f32 = 3.0;
/// Velocity scale applied per frame
pub const SPARK_STEP: f32 = 0.05;
pub const SPARK_FADE: f32 = 0.03;
pub const MIN_SPARK_SPEED: f32 = 50.0;
pub const MAX_SPARK_SPEED: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub opacity: f32,
}

impl Spark {
    pub fn is_alive(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn advance(&mut self) {
        self.pos += self.vel * SPARK_STEP;
        self.opacity -= SPARK_FADE;
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.is_alive() {
            return;
        }
        surface.fill_circle(
            self.pos,
            SPARK_RADIUS,
            &Paint::Solid(Rgb::VIOLET.with_alpha(self.opacity)),
        );
    }
}

/// Append `count` sparks radiating evenly from `center`
pub fn emit_burst(sparks: &mut Vec<Spark>, center: Vec2, count: usize, rng: &mut SimRng) {
    sparks.reserve(count);
    for i in 0..count {
        let angle = TAU * i as f32 / count as f32;
        let speed = lerp(MIN_SPARK_SPEED, MAX_SPARK_SPEED, rng.random::<f32>());
        sparks.push(Spark {
            pos: center,
            vel: Vec2::from_angle(angle) * speed,
            opacity: 1.0,
        });
    }
}
