//! # dashboard
//!
//! Leptos + WASM frontend for the admin panel: user, role, session, and
//! configuration management against the admin REST backend.
//!
//! This crate contains pages, components, application state, the REST
//! client, and browser utilities. The `ssr` feature is linked into the
//! `adminpanel` host; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
