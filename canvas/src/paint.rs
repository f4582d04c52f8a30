//! Painting: replays a [`DisplayList`] onto a 2D context.
//!
//! This module is the only place that issues drawing calls on a
//! [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::render::{DisplayList, DrawOp};

/// Paint every op in order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(ctx: &CanvasRenderingContext2d, list: &DisplayList) -> Result<(), JsValue> {
    for op in list.ops() {
        paint_op(ctx, op)?;
    }
    Ok(())
}

fn paint_op(ctx: &CanvasRenderingContext2d, op: &DrawOp) -> Result<(), JsValue> {
    match op {
        DrawOp::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
        DrawOp::Line { from, to, stroke, line_width } => {
            ctx.set_stroke_style_str(stroke);
            ctx.set_line_width(*line_width);
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.stroke();
        }
        DrawOp::FillRect { x, y, width, height, fill } => {
            ctx.set_fill_style_str(fill);
            ctx.fill_rect(*x, *y, *width, *height);
        }
        DrawOp::StrokeRect { x, y, width, height, stroke, line_width } => {
            ctx.set_stroke_style_str(stroke);
            ctx.set_line_width(*line_width);
            ctx.stroke_rect(*x, *y, *width, *height);
        }
        DrawOp::FillCircle { center, radius, fill } => {
            ctx.set_fill_style_str(fill);
            ctx.begin_path();
            ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI)?;
            ctx.fill();
        }
        DrawOp::FillTriangle { points, fill } => fill_triangle(ctx, points, fill),
    }
    Ok(())
}

fn fill_triangle(ctx: &CanvasRenderingContext2d, points: &[Point; 3], fill: &str) {
    let [a, b, c] = points;
    ctx.set_fill_style_str(fill);
    ctx.begin_path();
    ctx.move_to(a.x, a.y);
    ctx.line_to(b.x, b.y);
    ctx.line_to(c.x, c.y);
    ctx.close_path();
    ctx.fill();
}
