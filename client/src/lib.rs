//! # wiz-client
//!
//! Leptos + WASM frontend for the WIZ marketing site and member dashboard.
//!
//! The public pages are static content. The member area is gated by a route
//! guard over a browser-persisted session that the sign-in and sign-up flows
//! write after the remote auth API accepts the credentials. Administrators
//! additionally get a user listing backed by an authenticated API call.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install console logging and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
