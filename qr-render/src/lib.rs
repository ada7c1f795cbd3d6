//! QR encoding behind a draw-to-surface contract
//!
//! This crate wraps a QR encoder and paints the resulting module matrix onto
//! a caller-supplied [`Surface`]. The surface is a trait so the browser
//! frontend can hand in a canvas while tests hand in an in-memory pixel
//! buffer and decode the result back.
//!
//! # Example
//!
//! ```no_run
//! use qr_render::{QrRenderer, RenderOptions, Surface};
//!
//! fn render(surface: &mut dyn Surface) -> qr_render::Result<()> {
//!     let renderer = QrRenderer::new();
//!     renderer.draw("https://example.com/", &RenderOptions::default(), surface)
//! }
//! ```

pub mod error;
pub mod grid;
pub mod options;
pub mod renderer;
pub mod surface;

pub use error::{Error, Result};
pub use grid::ModuleGrid;
pub use options::{RenderOptions, Rgb};
pub use renderer::QrRenderer;
pub use surface::Surface;

pub use qrcode::EcLevel;
