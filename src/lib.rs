//! # hostelgrid-ui
//!
//! Leptos + WASM frontend for the HostelGrid hostel-management product.
//!
//! The interesting part is the session subsystem: bearer-token
//! acquisition and refresh ([`state::session`]), durable persistence across
//! reloads ([`store`]), retry-once handling of expired tokens
//! ([`net::http`] + `SessionManager::send`), and role-gated routing
//! ([`state::guard`], wired up in [`app`]). Pages and components are
//! presentational.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod store;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
