//! Rendering: builds the full frame as a list of drawing operations.
//!
//! Every function here is pure. It reads the document snapshot, the camera
//! and the gesture state, and appends [`DrawOp`]s to a [`DisplayList`]. The
//! list is replayed onto a real canvas by [`crate::paint`], which keeps this
//! module testable without a browser.
//!
//! Layer order is fixed: clear, grid, rectangles, corners, sectors, path,
//! preview. The preview is always last so an in-progress gesture is never
//! hidden by committed content.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Camera, Point};
use crate::consts::{ARROW_HEAD_ANGLE, ARROW_HEAD_LEN_PX, MARKER_RADIUS_PX};
use crate::doc::{DocStore, RectEdge, Rectangle, SnowSector};
use crate::input::DragState;

/// Grid stroke, `#rrggbbaa`.
const GRID_STROKE: &str = "#e0e0e032";
const RECT_FILL: &str = "rgba(0, 0, 255, 0.75)";
const RECT_STROKE: &str = "blue";
const CORNER_FILL: &str = "green";
const PATH_STROKE: &str = "purple";
const ARROW_HEAD_FILL: &str = "black";
const PREVIEW_STROKE: &str = "red";
const LINE_WIDTH: f64 = 1.0;

/// One drawing primitive, in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Clear the whole surface.
    Clear { width: f64, height: f64 },
    /// Stroke a straight line.
    Line { from: Point, to: Point, stroke: String, line_width: f64 },
    /// Fill an axis-aligned rectangle.
    FillRect { x: f64, y: f64, width: f64, height: f64, fill: String },
    /// Stroke the outline of an axis-aligned rectangle.
    StrokeRect { x: f64, y: f64, width: f64, height: f64, stroke: String, line_width: f64 },
    /// Fill a circle.
    FillCircle { center: Point, radius: f64, fill: String },
    /// Fill a closed triangle.
    FillTriangle { points: [Point; 3], fill: String },
}

/// Ordered drawing operations for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

/// Everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub doc: &'a DocStore,
    pub camera: &'a Camera,
    pub drag: &'a DragState,
    pub width: f64,
    pub height: f64,
    pub grid_size: f64,
}

/// A directed path segment with its arrowhead, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub from: Point,
    pub to: Point,
    /// Direction of the segment, `atan2(dy, dx)`.
    pub angle: f64,
    /// The two back vertices of the head, at ±30° from the segment.
    pub head: [Point; 2],
}

/// Build the full frame.
#[must_use]
pub fn build(frame: &Frame<'_>) -> DisplayList {
    let mut list = DisplayList::new();
    list.push(DrawOp::Clear { width: frame.width, height: frame.height });

    render_grid(&mut list, frame.width, frame.height, frame.grid_size);
    render_rectangles(&mut list, frame.doc.rectangles(), frame.camera);
    render_corners(&mut list, frame.doc.edges(), frame.camera);
    render_sectors(&mut list, frame.doc.sectors(), frame.camera);
    render_path(&mut list, frame.doc.path(), frame.camera);
    if let Some((start, current)) = frame.drag.preview() {
        render_preview(&mut list, start, current);
    }
    list
}

// =============================================================
// Layers
// =============================================================

/// Vertical and horizontal guide lines every `grid_size` pixels, edges included.
pub fn render_grid(list: &mut DisplayList, width: f64, height: f64, grid_size: f64) {
    if grid_size <= 0.0 {
        return;
    }

    let mut x = 0.0;
    while x <= width {
        list.push(line(Point::new(x, 0.0), Point::new(x, height), GRID_STROKE));
        x += grid_size;
    }

    let mut y = 0.0;
    while y <= height {
        list.push(line(Point::new(0.0, y), Point::new(width, y), GRID_STROKE));
        y += grid_size;
    }
}

/// Translucent fill plus border for each rectangle, in list order.
pub fn render_rectangles(list: &mut DisplayList, rectangles: &[Rectangle], camera: &Camera) {
    for rect in rectangles {
        let origin = camera.model_to_screen(Point::new(rect.x, rect.y));
        let width = camera.model_len_to_screen(rect.width);
        let height = camera.model_len_to_screen(rect.height);

        list.push(DrawOp::FillRect { x: origin.x, y: origin.y, width, height, fill: RECT_FILL.to_owned() });
        list.push(DrawOp::StrokeRect {
            x: origin.x,
            y: origin.y,
            width,
            height,
            stroke: RECT_STROKE.to_owned(),
            line_width: LINE_WIDTH,
        });
    }
}

/// Four fixed-size markers per corner set. Marker size ignores zoom.
pub fn render_corners(list: &mut DisplayList, edges: &[RectEdge], camera: &Camera) {
    for edge in edges {
        for corner in edge.points() {
            list.push(marker(camera.model_to_screen(corner), CORNER_FILL));
        }
    }
}

/// One marker per sector, painted in that sector's own color.
pub fn render_sectors(list: &mut DisplayList, sectors: &[SnowSector], camera: &Camera) {
    for sector in sectors {
        list.push(marker(camera.model_to_screen(sector.coords), &sector.color));
    }
}

/// A directed arrow between each consecutive pair of path points.
pub fn render_path(list: &mut DisplayList, path: &[Point], camera: &Camera) {
    for arrow in path_arrows(path, camera) {
        list.push(line(arrow.from, arrow.to, PATH_STROKE));
        list.push(DrawOp::FillTriangle {
            points: [arrow.to, arrow.head[0], arrow.head[1]],
            fill: ARROW_HEAD_FILL.to_owned(),
        });
    }
}

/// Outline of the in-progress gesture. Already in pixels, so never scaled.
pub fn render_preview(list: &mut DisplayList, start: Point, current: Point) {
    list.push(DrawOp::StrokeRect {
        x: start.x.min(current.x),
        y: start.y.min(current.y),
        width: (current.x - start.x).abs(),
        height: (current.y - start.y).abs(),
        stroke: PREVIEW_STROKE.to_owned(),
        line_width: LINE_WIDTH,
    });
}

// =============================================================
// Arrow geometry
// =============================================================

/// Arrow from `from` to `to` (model space), scaled to pixels.
#[must_use]
pub fn arrow(from: Point, to: Point, camera: &Camera) -> Arrow {
    let from = camera.model_to_screen(from);
    let to = camera.model_to_screen(to);
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let back = |offset: f64| {
        Point::new(
            to.x - ARROW_HEAD_LEN_PX * (angle + offset).cos(),
            to.y - ARROW_HEAD_LEN_PX * (angle + offset).sin(),
        )
    };
    Arrow { from, to, angle, head: [back(-ARROW_HEAD_ANGLE), back(ARROW_HEAD_ANGLE)] }
}

/// Arrows for every consecutive pair of path points; empty below two points.
#[must_use]
pub fn path_arrows(path: &[Point], camera: &Camera) -> Vec<Arrow> {
    path.windows(2)
        .map(|pair| arrow(pair[0], pair[1], camera))
        .collect()
}

// =============================================================
// Helpers
// =============================================================

fn line(from: Point, to: Point, stroke: &str) -> DrawOp {
    DrawOp::Line { from, to, stroke: stroke.to_owned(), line_width: LINE_WIDTH }
}

fn marker(center: Point, fill: &str) -> DrawOp {
    DrawOp::FillCircle { center, radius: MARKER_RADIUS_PX, fill: fill.to_owned() }
}
