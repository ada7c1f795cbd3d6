//! Love Scanner - Leptos browser frontend
//!
//! A single decorative page: a QR code for the anniversary link, floating
//! hearts, and a button that opens the link after a short "scanning" delay.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod canvas;
mod components;
mod pages;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages should reach the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Love Scanner starting...");

    // Hide the static splash as soon as the WASM bundle is running
    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading splash element, if present
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available; cannot hide loading screen");
        return;
    };

    if let Some(loading) = document.get_element_by_id("leptos-loading") {
        if loading.class_list().add_1("hidden").is_err() {
            // Inline style fallback when the class list is unavailable
            let _ = loading.set_attribute("style", "display: none;");
        }
    }
}
