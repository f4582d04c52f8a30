//! Page-level reactive state, provided as `RwSignal` contexts by `app::App`.

pub mod banner;
pub mod drawing;
