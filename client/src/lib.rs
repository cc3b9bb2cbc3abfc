//! # blender-client
//!
//! Leptos + WASM frontend for the word blender demo.
//!
//! Users pick two words from the board, the server blends them into a new
//! word, and an image is generated for the result. Generated images are kept
//! in a small gallery persisted to browser `localStorage`.
//!
//! The crate is rendered on the server with the `ssr` feature and hydrated in
//! the browser with the `hydrate` feature. Native builds with neither feature
//! are used for unit tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser diagnostics and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
