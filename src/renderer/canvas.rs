//! Canvas2D drawing backend (wasm32)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::consts::{SURFACE_H, SURFACE_W};

/// Surface over a canvas 2d context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap the canvas, sizing it to the playfield. Returns `None` when the
    /// 2d context is unavailable; callers treat that as fatal before the
    /// loop ever starts.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        canvas.set_width(SURFACE_W as u32);
        canvas.set_height(SURFACE_H as u32);
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: &'static str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(0.0, 0.0, SURFACE_W as f64, SURFACE_H as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &'static str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &'static str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
