#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MIN_SCALE, ZOOM_STEP};

/// A point in either model or pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Zoom state for the drawing surface.
///
/// `scale` multiplies model coordinates into pixels (1.0 = no zoom). There
/// is no pan: model origin is always the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Convert a model-space point to pixel coordinates.
    #[must_use]
    pub fn model_to_screen(&self, model: Point) -> Point {
        Point { x: model.x * self.scale, y: model.y * self.scale }
    }

    /// Convert a model-space length to pixels.
    #[must_use]
    pub fn model_len_to_screen(&self, len: f64) -> f64 {
        len * self.scale
    }

    /// Convert a pixel length to model-space length.
    #[must_use]
    pub fn screen_len_to_model(&self, len: f64) -> f64 {
        len / self.scale
    }

    /// Increase the scale by one step.
    pub fn zoom_in(&mut self) {
        self.scale += ZOOM_STEP;
    }

    /// Decrease the scale by one step, never going below [`MIN_SCALE`].
    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - ZOOM_STEP).max(MIN_SCALE);
    }
}
