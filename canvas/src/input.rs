//! Input model: the drag-to-create gesture state machine.
//!
//! `DragState` is the active gesture tracked between pointer-down and
//! pointer-up. Both points are raw pixel coordinates relative to the surface;
//! conversion to model space happens once, on commit.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging out a new rectangle.
    Dragging {
        /// Pixel position of the pointer-down that started the gesture.
        start: Point,
        /// Live pointer position; `None` until the first move.
        current: Option<Point>,
    },
}

impl DragState {
    /// The `(start, current)` pair to preview, once the pointer has moved.
    #[must_use]
    pub fn preview(&self) -> Option<(Point, Point)> {
        match *self {
            Self::Dragging { start, current: Some(current) } => Some((start, current)),
            _ => None,
        }
    }
}
