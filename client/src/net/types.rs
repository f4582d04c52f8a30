//! Wire types exchanged with the geometry service.
//!
//! These mirror the shapes in `canvas::doc` but live here so the SSR build
//! does not pull in the browser-only canvas crate. `util::canvas_bridge`
//! converts between the two.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A model-space point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A committed rectangle in model space; `x,y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Corner set returned by `POST /api/rectangles/`, one per input rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectEdge {
    pub topleft: Point,
    pub topright: Point,
    pub bottomleft: Point,
    pub bottomright: Point,
}

/// Annotated point returned by `POST /api/snowsectors/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnowSector {
    pub coords: Point,
    pub snow_load: f64,
    pub color: String,
    pub dump_site: bool,
}

/// Body of `GET /api/greeting/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub text: String,
}

/// Error payload the geometry service attaches to failed responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
