//! # devtasks
//!
//! Leptos + WASM frontend for the DevTasks project/task manager.
//!
//! The interesting part lives in `state::session`, `net::auth`, and
//! `components::route_guard`: establishing a cookie-backed session with a
//! CSRF token, re-validating it against the server, and gating navigation
//! between public and protected views. Everything else is page composition
//! and thin fetch wrappers over the remote API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
