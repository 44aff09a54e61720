//! Canvas2D surface (WASM only)

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::paint::{ColorStop, Paint, Rgb};
use super::surface::Surface;
use crate::Viewport;

/// [`Surface`] backed by an `HtmlCanvasElement` 2d context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    /// Look up `<canvas id=...>` and its 2d context.
    ///
    /// Returns `None` when the element is missing, is not a canvas, or has no
    /// 2d context; callers skip the engine in that case.
    pub fn from_element_id(id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas = document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            canvas,
            ctx,
            viewport: Viewport::default(),
        })
    }

    fn gradient_stops(gradient: &CanvasGradient, stops: &[ColorStop]) {
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset, &stop.color.to_css());
        }
    }

    fn linear(&self, from: Vec2, to: Vec2, stops: &[ColorStop]) -> CanvasGradient {
        let gradient =
            self.ctx
                .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        Self::gradient_stops(&gradient, stops);
        gradient
    }

    fn radial(&self, center: Vec2, r0: f32, r1: f32, stops: &[ColorStop]) -> Option<CanvasGradient> {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = self
            .ctx
            .create_radial_gradient(x, y, r0 as f64, x, y, r1 as f64)
            .ok()?;
        Self::gradient_stops(&gradient, stops);
        Some(gradient)
    }

    fn apply_fill(&self, paint: &Paint<'_>) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Paint::Linear(g) => {
                let gradient = self.linear(g.from, g.to, g.stops);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial(g) => {
                if let Some(gradient) =
                    self.radial(g.center, g.inner_radius, g.outer_radius, g.stops)
                {
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                }
            }
        }
    }

    fn apply_stroke(&self, paint: &Paint<'_>) {
        match paint {
            Paint::Solid(color) => self.ctx.set_stroke_style_str(&color.to_css()),
            Paint::Linear(g) => {
                let gradient = self.linear(g.from, g.to, g.stops);
                self.ctx.set_stroke_style_canvas_gradient(&gradient);
            }
            Paint::Radial(g) => {
                if let Some(gradient) =
                    self.radial(g.center, g.inner_radius, g.outer_radius, g.stops)
                {
                    self.ctx.set_stroke_style_canvas_gradient(&gradient);
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.canvas.set_width(viewport.width.max(0.0) as u32);
        self.canvas.set_height(viewport.height.max(0.0) as u32);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
        self.apply_fill(paint);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint<'_>) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.apply_stroke(paint);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = self.ctx.rotate(angle as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn fill_glyph(&mut self, glyph: &str, size: f32, color: Rgb) {
        self.ctx.set_font(&format!("{}px serif", size.round()));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&color.with_alpha(1.0).to_css());
        let _ = self.ctx.fill_text(glyph, 0.0, 0.0);
    }
}
