//! Document model: rectangles, derived overlays, and the snapshot store.
//!
//! Rectangles are stored in model space (un-scaled pixels). The overlays
//! (`RectEdge`, `SnowSector`, path points) are produced by the external
//! geometry service and are only ever read here.
//!
//! The host owns all four collections. `DocStore` holds the latest snapshot
//! of each one; they are sized independently and may come from different
//! rectangle sets, so nothing here assumes they line up.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Point};

/// An axis-aligned roof section. `x, y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Build the model-space rectangle spanned by a pixel-space drag.
    ///
    /// Drag direction does not matter; every component is floored after
    /// dividing by the camera scale, so zero-area drags yield a degenerate
    /// rectangle rather than an error.
    #[must_use]
    pub fn from_screen_drag(start: Point, current: Point, camera: &Camera) -> Self {
        Self {
            x: camera.screen_len_to_model(start.x.min(current.x)).floor(),
            y: camera.screen_len_to_model(start.y.min(current.y)).floor(),
            width: camera.screen_len_to_model((current.x - start.x).abs()).floor(),
            height: camera.screen_len_to_model((current.y - start.y).abs()).floor(),
        }
    }
}

/// The four corners of one rectangle, as computed by the geometry service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectEdge {
    pub topleft: Point,
    pub topright: Point,
    pub bottomleft: Point,
    pub bottomright: Point,
}

impl RectEdge {
    /// Corners in drawing order: top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn points(&self) -> [Point; 4] {
        [self.topleft, self.topright, self.bottomleft, self.bottomright]
    }
}

/// A load point produced by the geometry service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowSector {
    /// Model-space anchor of the marker.
    pub coords: Point,
    /// Snow load carried by this sector.
    pub snow_load: f64,
    /// CSS color the marker is painted with.
    pub color: String,
    /// Whether the sector is a dump site.
    pub dump_site: bool,
}

/// How the corner list lines up with the rectangle list. Corner sets belong
/// to the rectangle at the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerAlignment {
    /// Rectangles past the end of the corner list.
    pub unmatched_rectangles: usize,
    /// Corner sets past the end of the rectangle list.
    pub unmatched_edges: usize,
}

impl CornerAlignment {
    /// Both lists have the same length.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.unmatched_rectangles == 0 && self.unmatched_edges == 0
    }
}

/// Latest snapshot of the host-owned collections.
#[derive(Debug, Clone, Default)]
pub struct DocStore {
    rectangles: Vec<Rectangle>,
    edges: Vec<RectEdge>,
    sectors: Vec<SnowSector>,
    path: Vec<Point>,
}

impl DocStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rectangle snapshot.
    pub fn load_rectangles(&mut self, rectangles: Vec<Rectangle>) {
        self.rectangles = rectangles;
    }

    /// Replace the corner snapshot.
    pub fn load_edges(&mut self, edges: Vec<RectEdge>) {
        self.edges = edges;
    }

    /// Replace the sector snapshot.
    pub fn load_sectors(&mut self, sectors: Vec<SnowSector>) {
        self.sectors = sectors;
    }

    /// Replace the path snapshot.
    pub fn load_path(&mut self, path: Vec<Point>) {
        self.path = path;
    }

    /// Drop all four collections.
    pub fn clear(&mut self) {
        self.rectangles.clear();
        self.edges.clear();
        self.sectors.clear();
        self.path.clear();
    }

    #[must_use]
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    #[must_use]
    pub fn edges(&self) -> &[RectEdge] {
        &self.edges
    }

    #[must_use]
    pub fn sectors(&self) -> &[SnowSector] {
        &self.sectors
    }

    #[must_use]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Compare the corner list against the rectangle list by length.
    #[must_use]
    pub fn corner_alignment(&self) -> CornerAlignment {
        let paired = self.rectangles.len().min(self.edges.len());
        CornerAlignment {
            unmatched_rectangles: self.rectangles.len() - paired,
            unmatched_edges: self.edges.len() - paired,
        }
    }
}
