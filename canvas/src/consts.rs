//! Shared numeric constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Width of the zoomable drawing surface in pixels.
pub const SURFACE_WIDTH_PX: u32 = 800;

/// Height of the zoomable drawing surface in pixels.
pub const SURFACE_HEIGHT_PX: u32 = 600;

/// Width of the fixed-scale drawing surface in pixels.
pub const COMPACT_SURFACE_WIDTH_PX: u32 = 400;

/// Height of the fixed-scale drawing surface in pixels.
pub const COMPACT_SURFACE_HEIGHT_PX: u32 = 300;

/// Spacing of the background grid in pixels. Not affected by zoom.
pub const GRID_SIZE_PX: f64 = 25.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Scale a zoomable surface starts at.
pub const DEFAULT_SCALE: f64 = 2.0;

/// Additive change applied by one zoom in/out step.
pub const ZOOM_STEP: f64 = 0.1;

/// Lowest scale `zoom_out` can reach.
pub const MIN_SCALE: f64 = 0.1;

// ── Markers ─────────────────────────────────────────────────────

/// Radius of corner and sector markers in pixels, independent of zoom.
pub const MARKER_RADIUS_PX: f64 = 3.0;

/// Length of a path arrowhead side in pixels.
pub const ARROW_HEAD_LEN_PX: f64 = 5.0;

/// Arrowhead half-angle in radians (30°).
pub const ARROW_HEAD_ANGLE: f64 = std::f64::consts::FRAC_PI_6;
