//! Configuration options for a drawing surface.
//!
//! Two surface variants exist: a zoomable 800×600 surface that starts at
//! scale 2, and a compact 400×300 surface pinned to scale 1.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use crate::consts::{
    COMPACT_SURFACE_HEIGHT_PX, COMPACT_SURFACE_WIDTH_PX, DEFAULT_SCALE, GRID_SIZE_PX, SURFACE_HEIGHT_PX,
    SURFACE_WIDTH_PX,
};

/// Whether the zoom controls change the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// `zoom_in` / `zoom_out` move the scale in fixed steps.
    #[default]
    Stepped,
    /// The scale never changes; zoom requests are ignored.
    Fixed,
}

/// Surface configuration. Size is a constant of the surface, never derived
/// from content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerOptions {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Background grid spacing in pixels.
    pub grid_size: f64,
    /// Scale the camera starts at.
    pub initial_scale: f64,
    /// Zoom behavior.
    pub zoom: ZoomMode,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH_PX,
            height: SURFACE_HEIGHT_PX,
            grid_size: GRID_SIZE_PX,
            initial_scale: DEFAULT_SCALE,
            zoom: ZoomMode::Stepped,
        }
    }
}

impl DrawerOptions {
    /// The compact surface without zoom: model space equals pixel space.
    #[must_use]
    pub fn fixed_scale() -> Self {
        Self {
            width: COMPACT_SURFACE_WIDTH_PX,
            height: COMPACT_SURFACE_HEIGHT_PX,
            grid_size: GRID_SIZE_PX,
            initial_scale: 1.0,
            zoom: ZoomMode::Fixed,
        }
    }

    /// Whether zoom requests change the scale.
    #[must_use]
    pub fn zoomable(&self) -> bool {
        self.zoom == ZoomMode::Stepped
    }
}
