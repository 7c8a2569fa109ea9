//! [`Surface`] over a browser `CanvasRenderingContext2d`.
//!
//! Style and transform live in a [`StateStack`] on the Rust side. Each
//! primitive sets the context transform from the current state, traces a
//! fresh path, then fills and strokes it.

use circle_art_core::surface::{Path, PathSegment, StateStack, Surface};
use circle_art_core::Color;
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    stack: StateStack,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self {
            ctx,
            width,
            height,
            stack: StateStack::new(),
        }
    }

    fn apply_transform(&self) -> Result<(), JsValue> {
        let t = self.stack.current().transform;
        let m = t.matrix2;
        self.ctx.set_transform(
            m.x_axis.x,
            m.x_axis.y,
            m.y_axis.x,
            m.y_axis.y,
            t.translation.x,
            t.translation.y,
        )
    }

    /// Traces a path with `trace`, then fills (if `fill`) and strokes it
    /// with the current style.
    fn paint(
        &self,
        fill: bool,
        trace: impl FnOnce(&CanvasRenderingContext2d) -> Result<(), JsValue>,
    ) {
        let state = *self.stack.current();
        let result = self.apply_transform().and_then(|()| {
            self.ctx.begin_path();
            trace(&self.ctx)
        });
        if let Err(e) = result {
            log::warn!("canvas path failed: {e:?}");
            return;
        }
        if fill {
            if let Some(color) = state.fill {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.fill();
            }
        }
        if let Some(color) = state.stroke {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.set_line_width(state.stroke_width);
            self.ctx.stroke();
        }
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        if let Err(e) = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0) {
            log::warn!("canvas reset transform failed: {e:?}");
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn set_fill(&mut self, color: Option<Color>) {
        self.stack.current_mut().fill = color;
    }

    fn set_stroke(&mut self, color: Option<Color>) {
        self.stack.current_mut().stroke = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stack.current_mut().stroke_width = width;
    }

    fn circle(&mut self, center: DVec2, radius: f64) {
        if radius <= 0.0 {
            return;
        }
        self.paint(true, |ctx| ctx.arc(center.x, center.y, radius, 0.0, TAU));
    }

    fn ellipse(&mut self, center: DVec2, radii: DVec2) {
        if radii.x <= 0.0 || radii.y <= 0.0 {
            return;
        }
        self.paint(true, |ctx| {
            ctx.ellipse(center.x, center.y, radii.x, radii.y, 0.0, 0.0, TAU)
        });
    }

    fn rect(&mut self, origin: DVec2, size: DVec2) {
        self.paint(true, |ctx| {
            ctx.rect(origin.x, origin.y, size.x, size.y);
            Ok(())
        });
    }

    fn line(&mut self, from: DVec2, to: DVec2) {
        self.paint(false, |ctx| {
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            Ok(())
        });
    }

    fn shape(&mut self, path: &Path) {
        if path.is_empty() {
            return;
        }
        self.paint(true, |ctx| {
            for segment in path.segments() {
                match *segment {
                    PathSegment::MoveTo(p) => ctx.move_to(p.x, p.y),
                    PathSegment::LineTo(p) => ctx.line_to(p.x, p.y),
                    PathSegment::QuadTo { control, end } => {
                        ctx.quadratic_curve_to(control.x, control.y, end.x, end.y)
                    }
                    PathSegment::CubicTo {
                        control1,
                        control2,
                        end,
                    } => ctx.bezier_curve_to(
                        control1.x, control1.y, control2.x, control2.y, end.x, end.y,
                    ),
                    PathSegment::Close => ctx.close_path(),
                }
            }
            Ok(())
        });
    }

    fn push(&mut self) {
        self.stack.push();
    }

    fn pop(&mut self) {
        self.stack.pop();
    }

    fn translate(&mut self, offset: DVec2) {
        self.stack.translate(offset);
    }

    fn rotate(&mut self, angle: f64) {
        self.stack.rotate(angle);
    }

    fn scale(&mut self, factor: DVec2) {
        self.stack.scale(factor);
    }
}
