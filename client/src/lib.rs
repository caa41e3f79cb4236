//! # client
//!
//! Leptos + WASM front-end for the styledesk admin dashboard: a login page,
//! a patient page and a role/style mapping editor. Each admin view is skinned
//! at runtime from the `UserComponent` service through the `skin` crate.
//!
//! Browser-only code (transport, storage, DOM observation, the entry point)
//! is gated behind the `csr` feature so the rest compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: panic hook, console logging, mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);
    log::info!("styledesk client starting");
    leptos::mount::mount_to_body(app::App);
}
