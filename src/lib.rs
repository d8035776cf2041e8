//! # rainos-client
//!
//! Leptos + WASM frontend for the Rain OS SaaS dashboard: account
//! authentication, usage overview, API key management, and subscription
//! billing. The app is a thin presentation layer over three external
//! services — an identity provider (email/password, OTP verification,
//! OAuth), the Rain OS backend REST API, and the payment provider's
//! hosted checkout/portal flows.
//!
//! The load-bearing piece is the session coordinator in [`net::session`],
//! which reconciles identity-provider session events with the backend's
//! notion of the user and feeds the auth state consumed by the route
//! gates in [`app`].

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
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
