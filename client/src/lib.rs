//! # client
//!
//! Leptos frontend for SnowApp, the roof-section sketcher.
//!
//! The crate is built twice: with `ssr` it is linked into the server and
//! renders the page shell, with `hydrate` it is compiled to WASM and takes over
//! in the browser. Only the hydrated build talks to the network or mounts the
//! `canvas` drawing engine; the SSR build sees inert stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the server markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
