//! Drawing surface for sketching roof sections.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interactive part of the sketcher: translating raw pointer events into
//! committed model-space rectangles, keeping the zoom scale, and painting the
//! rectangles together with the overlays computed by the geometry service
//! (corner markers, snow sectors and the traversal path). The host page owns
//! the rectangle list and the overlays; it hands them in as snapshots and
//! receives [`engine::Action`]s back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Rectangles, derived overlays, and the snapshot store |
//! | [`camera`] | Zoom scale and model/pixel coordinate conversions |
//! | [`input`] | The drag-to-create gesture state machine |
//! | [`options`] | Surface size, grid spacing, and zoom behavior |
//! | [`render`] | Pure frame builder producing a [`render::DisplayList`] |
//! | [`paint`] | Replays a display list onto a 2D canvas context |
//! | [`consts`] | Shared numeric constants (zoom step, marker sizes, etc.) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod input;
pub mod options;
pub mod paint;
pub mod render;
