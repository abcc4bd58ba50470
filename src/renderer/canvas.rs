//! Canvas 2D backend: replays a [`DrawList`] onto a `<canvas>`

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::commands::{DrawCommand, DrawList, Stroke};

/// A canvas and its 2D context
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Backing-store size in pixels
    pub fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    /// Whether the canvas is still attached to the document
    pub fn is_connected(&self) -> bool {
        self.canvas.is_connected()
    }

    fn apply_stroke(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width as f64);
    }

    pub fn paint(&self, list: &DrawList) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        for cmd in list {
            match cmd {
                DrawCommand::Clear { size } => {
                    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
                }
                DrawCommand::StrokeRect { min, size, stroke } => {
                    self.apply_stroke(stroke);
                    ctx.stroke_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::FillRect { min, size, color } => {
                    ctx.set_fill_style_str(color);
                    ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                DrawCommand::Line { from, to, stroke } => {
                    self.apply_stroke(stroke);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
                DrawCommand::Polyline { points, stroke } => {
                    self.apply_stroke(stroke);
                    ctx.begin_path();
                    let mut iter = points.iter();
                    if let Some(first) = iter.next() {
                        ctx.move_to(first.x as f64, first.y as f64);
                    }
                    for p in iter {
                        ctx.line_to(p.x as f64, p.y as f64);
                    }
                    ctx.stroke();
                }
                DrawCommand::FillCircle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(color);
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                    ctx.fill();
                }
                DrawCommand::Text {
                    pos,
                    text,
                    font,
                    color,
                } => {
                    ctx.set_font(font);
                    ctx.set_fill_style_str(color);
                    ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
                }
            }
        }
        Ok(())
    }
}
