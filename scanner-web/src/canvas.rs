//! Canvas-backed draw surface for the QR renderer

use qr_render::{Error, Result, Rgb, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// [`qr_render::Surface`] implementation over a canvas 2d context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas element, acquiring its 2d context
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let context = canvas
            .get_context("2d")
            .map_err(|e| Error::Surface(format!("2d context unavailable: {:?}", e)))?
            .ok_or_else(|| Error::Surface("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::Surface("context is not a 2d rendering context".to_string()))?;

        Ok(Self { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, side: u32, background: Rgb) -> Result<()> {
        self.canvas.set_width(side);
        self.canvas.set_height(side);
        self.context.set_fill_style_str(&background.to_css());
        self.context
            .fill_rect(0.0, 0.0, f64::from(side), f64::from(side));
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) -> Result<()> {
        self.context.set_fill_style_str(&color.to_css());
        self.context.fill_rect(x, y, w, h);
        Ok(())
    }
}
