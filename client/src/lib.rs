//! # qa-client
//!
//! Leptos + WASM frontend for the QA support console.
//!
//! This crate contains the session model and route guard, the REST client
//! for the QA backend, and the views for users, consultants and admins.
//! The `ssr` feature is consumed by `qa-server` to render the shell; the
//! `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
