//! Browser glue for the drawing surface. Empty outside the hydrated build.

#[cfg(feature = "hydrate")]
pub mod canvas_bridge;
#[cfg(feature = "hydrate")]
pub mod canvas_input;
