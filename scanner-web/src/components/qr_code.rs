//! QR Code Component
//! Draws the payload onto a canvas via the shared renderer

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use qr_render::{QrRenderer, RenderOptions};

use crate::canvas::CanvasSurface;
use crate::utils::constants::QR_MARGIN_MODULES;

/// Wait for the canvas to be attached before drawing
const DOM_SETTLE_MS: u32 = 50;

const CANVAS_ID: &str = "qr-canvas";

/// Renders `value` as a QR code on a square canvas of `size` pixels.
///
/// The draw is fire-and-forget: the canvas stays blank until the encode
/// completes, and failures are logged rather than surfaced. If inputs change
/// while a draw is in flight both draws run; the last write to the canvas
/// wins.
#[component]
pub fn QrCode(#[prop(into)] value: String, #[prop(default = 200)] size: u32) -> impl IntoView {
    Effect::new(move || {
        let payload = value.clone();
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(DOM_SETTLE_MS).await;
            if let Err(e) = draw_onto_canvas(&payload, size) {
                log::error!("QR render failed: {}", e);
            }
        });
    });

    view! {
        <canvas id=CANVAS_ID class="qr-canvas" width=size height=size></canvas>
    }
}

/// Locate the canvas and run the renderer against it.
///
/// A missing or detached canvas is a no-op, not an error.
fn draw_onto_canvas(payload: &str, size: u32) -> qr_render::Result<()> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };
    let Some(element) = document.get_element_by_id(CANVAS_ID) else {
        return Ok(());
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        return Ok(());
    };

    let mut surface = CanvasSurface::new(canvas)?;
    let options = RenderOptions {
        size,
        margin: QR_MARGIN_MODULES,
        ..RenderOptions::default()
    };
    QrRenderer::new().draw(payload, &options, &mut surface)
}
