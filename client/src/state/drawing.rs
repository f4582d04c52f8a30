//! Owner state for the sketcher: the rectangle list and derived overlays.
//!
//! DESIGN
//! ======
//! The drawing surface only ever appends to `rectangles`; everything else is
//! replaced wholesale when a geometry request resolves. Each overlay records
//! the `revision` of the rectangle list it was computed from, so the page can
//! tell the user when corners, sectors or the path no longer match what is
//! drawn. Stale overlays are still shown.

#[cfg(test)]
#[path = "drawing_test.rs"]
mod drawing_test;

use crate::net::types::{Point, RectEdge, Rectangle, SnowSector};

/// A server-derived collection tagged with the rectangle revision it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay<T> {
    pub items: Vec<T>,
    /// `None` until the first response arrives, and again after a reset.
    pub revision: Option<u64>,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self { items: Vec::new(), revision: None }
    }
}

impl<T> Overlay<T> {
    /// Whether this overlay was computed from a different rectangle list.
    pub fn is_stale(&self, current: u64) -> bool {
        self.revision.is_some_and(|revision| revision != current)
    }

    fn replace(&mut self, items: Vec<T>, revision: u64) {
        self.items = items;
        self.revision = Some(revision);
    }

    fn clear(&mut self) {
        self.items.clear();
        self.revision = None;
    }
}

/// Which overlay a request or hint refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    Corners,
    Sectors,
    Path,
}

impl OverlayKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Corners => "corners",
            Self::Sectors => "sectors",
            Self::Path => "path",
        }
    }
}

/// Rectangles plus the three overlays computed from them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawingState {
    pub rectangles: Vec<Rectangle>,
    /// Bumped on every change to `rectangles`.
    pub revision: u64,
    /// Bumped on every reset; the drawer cancels any in-flight gesture when it changes.
    pub reset_seq: u64,
    pub edges: Overlay<RectEdge>,
    pub sectors: Overlay<SnowSector>,
    pub path: Overlay<Point>,
}

impl DrawingState {
    /// Append a rectangle committed by the drawing surface.
    pub fn append_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangles.push(rectangle);
        self.revision += 1;
    }

    /// Clear all four collections and ask the drawer to drop its gesture.
    pub fn reset(&mut self) {
        self.rectangles.clear();
        self.edges.clear();
        self.sectors.clear();
        self.path.clear();
        self.revision += 1;
        self.reset_seq += 1;
    }

    pub fn replace_edges(&mut self, edges: Vec<RectEdge>, revision: u64) {
        self.edges.replace(edges, revision);
    }

    pub fn replace_sectors(&mut self, sectors: Vec<SnowSector>, revision: u64) {
        self.sectors.replace(sectors, revision);
    }

    pub fn replace_path(&mut self, path: Vec<Point>, revision: u64) {
        self.path.replace(path, revision);
    }

    /// Rectangle list and revision to send with a geometry request.
    pub fn request_snapshot(&self) -> (Vec<Rectangle>, u64) {
        (self.rectangles.clone(), self.revision)
    }

    /// Overlays computed from an older rectangle list, in render order.
    pub fn stale_overlays(&self) -> Vec<OverlayKind> {
        let current = self.revision;
        [
            (OverlayKind::Corners, self.edges.is_stale(current)),
            (OverlayKind::Sectors, self.sectors.is_stale(current)),
            (OverlayKind::Path, self.path.is_stale(current)),
        ]
        .into_iter()
        .filter_map(|(kind, stale)| stale.then_some(kind))
        .collect()
    }

    /// One-line hint naming the stale overlays, if any.
    pub fn stale_hint(&self) -> Option<String> {
        let stale = self.stale_overlays();
        if stale.is_empty() {
            return None;
        }
        let names = stale.iter().map(|kind| kind.label()).collect::<Vec<_>>().join(", ");
        Some(format!("Out of date: {names}. Recalculate to refresh."))
    }
}
