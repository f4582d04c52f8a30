//! Reusable view components.

pub mod app_header;
pub mod greeting_banner;
pub mod rectangle_drawer;
