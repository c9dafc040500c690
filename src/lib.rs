//! # clinic-client
//!
//! Leptos + WASM frontend for the clinic management system's appointment and
//! service modules: list views with search/sort/pagination/column visibility,
//! and create/edit forms backed by the REST API.
//!
//! All business logic (validation, persistence, availability rules, access
//! control) lives server-side; this crate does form orchestration, optimistic
//! state updates, and thin API proxying. Role checks here are UI hints only,
//! never an authorization boundary.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
