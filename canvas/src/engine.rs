use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::doc::{DocStore, RectEdge, Rectangle, SnowSector};
use crate::input::DragState;
use crate::options::DrawerOptions;
use crate::paint;
use crate::render::{self, DisplayList, Frame};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A drag gesture completed; the host should append this rectangle.
    RectangleCommitted(Rectangle),
    /// The zoom scale changed to the given value.
    ScaleChanged(f64),
    /// Interaction or view state changed; the host should redraw.
    RenderNeeded,
}

/// Core engine state: everything that does not need the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub doc: DocStore,
    pub camera: Camera,
    pub input: DragState,
    pub options: DrawerOptions,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_options(DrawerOptions::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: DrawerOptions) -> Self {
        Self {
            doc: DocStore::new(),
            camera: Camera::new(options.initial_scale),
            input: DragState::Idle,
            options,
        }
    }

    // --- Data inputs ---

    /// Replace the rectangle snapshot.
    pub fn load_rectangles(&mut self, rectangles: Vec<Rectangle>) {
        self.doc.load_rectangles(rectangles);
    }

    /// Replace the corner snapshot.
    ///
    /// An empty corner list is the normal state before corners are computed.
    /// A new non-empty list whose length differs from the rectangle count is
    /// logged once; reloading the same list stays quiet.
    pub fn load_edges(&mut self, edges: Vec<RectEdge>) {
        let changed = !edges.is_empty() && edges.as_slice() != self.doc.edges();
        self.doc.load_edges(edges);
        let alignment = self.doc.corner_alignment();
        if changed && !alignment.is_aligned() {
            log::warn!(
                "corner sets do not line up with rectangles: {} unmatched rectangles, {} unmatched corner sets",
                alignment.unmatched_rectangles,
                alignment.unmatched_edges
            );
        }
    }

    /// Replace the sector snapshot.
    pub fn load_sectors(&mut self, sectors: Vec<SnowSector>) {
        self.doc.load_sectors(sectors);
    }

    /// Replace the path snapshot.
    pub fn load_path(&mut self, path: Vec<Point>) {
        self.doc.load_path(path);
    }

    /// Drop every snapshot and any gesture in progress. The scale is kept.
    pub fn reset(&mut self) {
        self.doc.clear();
        self.input = DragState::Idle;
    }

    // --- Input events ---

    /// Start a gesture at `screen_pt`, discarding any stale live position.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        self.input = DragState::Dragging { start: screen_pt, current: None };
        vec![Action::RenderNeeded]
    }

    /// Track the live position of an active gesture. No-op when idle.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match &mut self.input {
            DragState::Idle => Vec::new(),
            DragState::Dragging { current, .. } => {
                *current = Some(screen_pt);
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Finish the active gesture.
    ///
    /// Commits a rectangle if the pointer moved since pointer-down; a click
    /// without a move is discarded. Either way the gesture ends.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            DragState::Idle => Vec::new(),
            DragState::Dragging { current: None, .. } => vec![Action::RenderNeeded],
            DragState::Dragging { start, current: Some(current) } => {
                let rect = Rectangle::from_screen_drag(start, current, &self.camera);
                log::debug!("rectangle committed: {rect:?} at scale {}", self.camera.scale);
                vec![Action::RectangleCommitted(rect), Action::RenderNeeded]
            }
        }
    }

    // --- Zoom ---

    /// Zoom in one step. Ignored on a fixed-scale surface.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        if !self.options.zoomable() {
            return Vec::new();
        }
        self.camera.zoom_in();
        self.scale_changed()
    }

    /// Zoom out one step, clamped at the minimum scale. Ignored on a
    /// fixed-scale surface.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        if !self.options.zoomable() {
            return Vec::new();
        }
        self.camera.zoom_out();
        self.scale_changed()
    }

    fn scale_changed(&self) -> Vec<Action> {
        log::debug!("scale changed to {}", self.camera.scale);
        vec![Action::ScaleChanged(self.camera.scale), Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.camera.scale
    }

    /// Build the current frame.
    #[must_use]
    pub fn display_list(&self) -> DisplayList {
        render::build(&Frame {
            doc: &self.doc,
            camera: &self.camera,
            drag: &self.input,
            width: f64::from(self.options.width),
            height: f64::from(self.options.height),
            grid_size: self.options.grid_size,
        })
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine with explicit options. Resizes the canvas to match.
    #[must_use]
    pub fn with_options(canvas: HtmlCanvasElement, options: DrawerOptions) -> Self {
        canvas.set_width(options.width);
        canvas.set_height(options.height);
        Self { canvas, core: EngineCore::with_options(options) }
    }

    // --- Delegated data inputs ---

    pub fn load_rectangles(&mut self, rectangles: Vec<Rectangle>) {
        self.core.load_rectangles(rectangles);
    }

    pub fn load_edges(&mut self, edges: Vec<RectEdge>) {
        self.core.load_edges(edges);
    }

    pub fn load_sectors(&mut self, sectors: Vec<SnowSector>) {
        self.core.load_sectors(sectors);
    }

    pub fn load_path(&mut self, path: Vec<Point>) {
        self.core.load_path(path);
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.core.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.core.zoom_out()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = context_2d(&self.canvas)?;
        paint::paint(&ctx, &self.core.display_list())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.core.scale()
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}
