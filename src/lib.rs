//! # frontend
//!
//! Leptos + WASM front-end scaffold for the workout tracker.
//!
//! The page is a static frame (header, canvas, footer) around a single
//! `UserView` that fetches the user list from the local API on first mount.
//! With the `ssr` feature the same components render on the server behind
//! an axum host; with `hydrate` they take over in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod server;

/// Browser entrypoint: install panic and log hooks, then hydrate the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second hydrate call (hot reload) finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
