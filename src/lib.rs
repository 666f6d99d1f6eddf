//! # agave-client
//!
//! Leptos + WASM frontend for the agave growth predictor page.
//!
//! The page collects three plant measurements (height, rosette diameter,
//! functional leaf count), posts them to the prediction endpoint, and renders
//! the estimated growth time next to an animated SVG agave whose decoration
//! tracks the entered values.
//!
//! Browser-only code is gated behind the `hydrate` feature. Everything that
//! decides *what* the page shows (parsing, validation, attribute mapping,
//! transition timelines, response interpretation, formatting) is plain Rust
//! and tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod illustration;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and mounts the app into `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
