//! # client
//!
//! Leptos + WASM frontend for the TunisieIntern internship portal.
//!
//! This crate contains the session store, the role-based route guard, the
//! typed REST client with its 401 interceptor, and the route-level pages.
//! The host binary renders it with SSR; the browser hydrates it through
//! [`hydrate`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
