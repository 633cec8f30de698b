//! # cvpro-client
//!
//! Leptos + WASM single-page client for the CV Pro resume service.
//!
//! The crate is built around a small authentication core: an HTTP wrapper
//! that attaches the bearer token and evicts it on 401 (`net::client`), a
//! session context that owns the token and the resolved profile
//! (`state::auth`), and a route guard that sends anonymous visitors of
//! protected routes to the login page (`util::auth`). Pages and the root
//! component consume that core.
//!
//! Browser-only pieces (fetch transport, `localStorage`, the mount hook) are
//! gated behind the `csr` feature so the rest compiles and tests natively.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
