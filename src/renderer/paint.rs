//! Colors, gradients and fill styles

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque RGB triple, used for palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Accent purple shared by star glows and sparks
    pub const VIOLET: Rgb = Rgb::new(124, 58, 237);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel (clamped to [0, 1])
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            rgb: self,
            a: alpha.clamp(0.0, 1.0),
        }
    }
}

/// RGB color with alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        rgb: Rgb::BLACK,
        a: 0.0,
    };

    /// CSS `rgba(...)` string for Canvas2D fill/stroke styles
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.a
        )
    }
}

/// A gradient color stop at `offset` in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Gradient along the segment `from` -> `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient<'a> {
    pub from: Vec2,
    pub to: Vec2,
    pub stops: &'a [ColorStop],
}

/// Gradient between two concentric circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient<'a> {
    pub center: Vec2,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stops: &'a [ColorStop],
}

/// Fill or stroke style for a single drawing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint<'a> {
    Solid(Rgba),
    Linear(LinearGradient<'a>),
    Radial(RadialGradient<'a>),
}
