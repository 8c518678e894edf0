//! # cookbook-client
//!
//! Leptos + WASM frontend for a small family cookbook. Browsing and recipe
//! detail are public; adding and editing recipes sit behind a shared-password
//! session that lives for the duration of the browser tab.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client for the recipe API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated JS loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
