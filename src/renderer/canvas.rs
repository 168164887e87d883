//! `CanvasRenderingContext2d` backend for [`DrawSurface`]
//!
//! Individual draw calls that the DOM reports as fallible are discarded with
//! `let _ =`; a lost context only ever costs a frame, never the simulation.

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, DrawSurface, Paint};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    fn apply_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.css()),
            Paint::Linear { from, to, start, end } => {
                let gradient = self
                    .ctx
                    .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
                let _ = gradient.add_color_stop(0.0, &start.css());
                let _ = gradient.add_color_stop(1.0, &end.css());
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
    }

    fn apply_stroke(&self, paint: &Paint, width: f32) {
        self.ctx.set_line_width(width as f64);
        match paint {
            Paint::Solid(color) => self.ctx.set_stroke_style_str(&color.css()),
            Paint::Linear { from, to, start, end } => {
                let gradient = self
                    .ctx
                    .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
                let _ = gradient.add_color_stop(0.0, &start.css());
                let _ = gradient.add_color_stop(1.0, &end.css());
                self.ctx.set_stroke_style_canvas_gradient(&gradient);
            }
        }
    }

    fn trace_path(&self, points: &[Vec2]) {
        self.ctx.begin_path();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.ctx.move_to(first.x as f64, first.y as f64);
        }
        for p in iter {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, outline: Option<(Color, f32)>) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.apply_fill(paint);
        self.ctx.fill();
        if let Some((color, width)) = outline {
            self.apply_stroke(&Paint::Solid(color), width);
            self.ctx.stroke();
        }
    }

    fn stroke_path(&mut self, points: &[Vec2], paint: &Paint, width: f32) {
        if points.len() < 2 {
            return;
        }
        self.trace_path(points);
        self.apply_stroke(paint, width);
        self.ctx.stroke();
    }

    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        from_angle: f32,
        to_angle: f32,
        paint: &Paint,
        width: f32,
    ) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            from_angle as f64,
            to_angle as f64,
        );
        self.apply_stroke(paint, width);
        self.ctx.stroke();
    }

    fn fill_polygon(&mut self, points: &[Vec2], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        self.trace_path(points);
        self.ctx.close_path();
        self.apply_fill(paint);
        self.ctx.fill();
    }
}
