//! Scanner Page - QR card, action button, and decorative dressing

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::{FlyingHearts, QrCode};
use crate::state::scan::ScanState;
use crate::utils::constants::{ANNIVERSARY_URL, OPEN_DELAY_MS, QR_SIZE};

#[component]
pub fn ScannerPage() -> impl IntoView {
    let (scan_state, set_scan_state) = signal(ScanState::NotScanned);

    // Pending navigation timer. The handle is parked here so a future
    // teardown path could cancel it by dropping; today the page never tears
    // down before it fires.
    let pending_open = StoredValue::new_local(None::<Timeout>);

    let handle_scan = move |_| {
        if !scan_state.get_untracked().can_activate() {
            return;
        }

        set_scan_state.update(|state| *state = state.activate());

        log::info!("Scan simulated; opening the surprise in {}ms", OPEN_DELAY_MS);
        let timeout = Timeout::new(OPEN_DELAY_MS, open_anniversary_link);
        pending_open.set_value(Some(timeout));
    };

    view! {
        <div class="scanner-page">
            <FlyingHearts/>

            <div class="card">
                <div class="card-header">
                    <h1 class="card-title">"💕 Love Scanner 💕"</h1>
                    <p class="card-subtitle">"Scan the code below for a special surprise"</p>
                </div>

                <div class="qr-frame">
                    <QrCode value=ANNIVERSARY_URL size=QR_SIZE/>
                </div>

                <p class="card-hint">"Or tap the button below to open directly"</p>

                <button
                    class="scan-btn"
                    disabled=move || scan_state.get().is_scanned()
                    on:click=handle_scan
                >
                    {move || if scan_state.get().is_scanned() {
                        view! {
                            <span class="btn-label">
                                <span class="spin">"💖"</span>
                                " Opening your surprise..."
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="btn-label">"💕 Open Anniversary Link"</span>
                        }.into_any()
                    }}
                </button>

                <div class="card-footer">
                    <p class="card-quote">
                        "\"Every love story is beautiful, but ours is my favorite\""
                    </p>
                    <div class="pulse-row">
                        <span class="pulse">"💕"</span>
                        <span class="pulse" style="animation-delay: 0.5s;">"💖"</span>
                        <span class="pulse" style="animation-delay: 1s;">"💕"</span>
                    </div>
                </div>
            </div>

            <span class="corner-glyph corner-top-left">"🌸"</span>
            <span class="corner-glyph corner-bottom-right" style="animation-delay: 1s;">"🌸"</span>
            <span class="corner-glyph corner-mid-left" style="animation-delay: 2s;">"💝"</span>
            <span class="corner-glyph corner-mid-right" style="animation-delay: 3s;">"💝"</span>
        </div>
    }
}

/// Ask the browser to open the anniversary link in a new tab.
///
/// Fire-and-forget: a blocked pop-up is neither detected nor reported.
fn open_anniversary_link() {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available; cannot open link");
        return;
    };
    let _ = window.open_with_url_and_target(ANNIVERSARY_URL, "_blank");
}
