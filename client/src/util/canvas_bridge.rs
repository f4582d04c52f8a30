//! Conversions between wire types and the `canvas` crate's model types.

use canvas::camera::Point as CanvasPoint;
use canvas::doc::{RectEdge as CanvasEdge, Rectangle as CanvasRect, SnowSector as CanvasSector};
use canvas::engine::Engine;

use crate::net::types::{Point, RectEdge, Rectangle, SnowSector};
use crate::state::drawing::DrawingState;

fn to_canvas_point(p: Point) -> CanvasPoint {
    CanvasPoint::new(p.x, p.y)
}

fn to_canvas_rect(r: &Rectangle) -> CanvasRect {
    CanvasRect::new(r.x, r.y, r.width, r.height)
}

fn to_canvas_edge(e: &RectEdge) -> CanvasEdge {
    CanvasEdge {
        topleft: to_canvas_point(e.topleft),
        topright: to_canvas_point(e.topright),
        bottomleft: to_canvas_point(e.bottomleft),
        bottomright: to_canvas_point(e.bottomright),
    }
}

fn to_canvas_sector(s: &SnowSector) -> CanvasSector {
    CanvasSector {
        coords: to_canvas_point(s.coords),
        snow_load: s.snow_load,
        color: s.color.clone(),
        dump_site: s.dump_site,
    }
}

/// Wire form of a rectangle committed by the engine.
pub fn from_canvas_rect(r: CanvasRect) -> Rectangle {
    Rectangle { x: r.x, y: r.y, width: r.width, height: r.height }
}

/// Push every owner collection into the engine as a fresh snapshot.
pub fn load_snapshot(engine: &mut Engine, drawing: &DrawingState) {
    engine.load_rectangles(drawing.rectangles.iter().map(to_canvas_rect).collect());
    engine.load_edges(drawing.edges.items.iter().map(to_canvas_edge).collect());
    engine.load_sectors(drawing.sectors.items.iter().map(to_canvas_sector).collect());
    engine.load_path(drawing.path.items.iter().copied().map(to_canvas_point).collect());
}
