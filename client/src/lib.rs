//! FedMind client crate.
//!
//! A Leptos CSR single-page application that collects survey features,
//! submits them to the prediction API, and renders the result. The crate
//! is split into route-level `pages`, reusable `components`, pure `state`
//! and `util` helpers, endpoint `config`, and the `net` API client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the application to the document body.
///
/// Only compiled for the browser (`csr`) target; installs the panic hook
/// and console logger before mounting.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
