//! Helpdesk web client: a Leptos front end for the support-ticket portal.
//!
//! ARCHITECTURE
//! ============
//! `pages` own route-level orchestration, `components` render reusable
//! surfaces, `state` holds context-shared view state, `net` wraps the REST
//! API, and `util` carries environment-independent helpers. Browser-only
//! behavior is gated behind the `hydrate` feature; everything else tests
//! natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
