//! QR renderer: encode a payload and paint it onto a surface

use crate::error::{Error, Result};
use crate::grid::ModuleGrid;
use crate::options::RenderOptions;
use crate::surface::Surface;
use qrcode::{EcLevel, QrCode};

/// QR renderer with a configurable error correction level
pub struct QrRenderer {
    ec_level: EcLevel,
}

impl QrRenderer {
    /// Create a new renderer with default settings (Medium ECC)
    pub fn new() -> Self {
        Self {
            ec_level: EcLevel::M,
        }
    }

    /// Create a new renderer with a specific error correction level
    pub fn with_error_correction_level(ec_level: EcLevel) -> Self {
        Self { ec_level }
    }

    /// Encode a payload into its module matrix
    pub fn encode(&self, payload: &str) -> Result<ModuleGrid> {
        if payload.is_empty() {
            return Err(Error::Encode("empty payload".to_string()));
        }

        let code = QrCode::with_error_correction_level(payload, self.ec_level)
            .map_err(|e| Error::Encode(format!("Failed to create QR code: {}", e)))?;

        Ok(ModuleGrid::new(code.width(), code.to_colors()))
    }

    /// Encode `payload` and draw it onto `surface` at `options.size` square
    /// pixels.
    ///
    /// The surface is untouched when encoding fails. Dark modules are painted
    /// over a full background fill; the quiet zone is `options.margin`
    /// modules on each side, and the module scale is fractional so the
    /// drawing spans exactly `size` pixels.
    pub fn draw(
        &self,
        payload: &str,
        options: &RenderOptions,
        surface: &mut dyn Surface,
    ) -> Result<()> {
        let grid = self.encode(payload)?;

        let cells = grid.width() as u32 + 2 * options.margin;
        let scale = f64::from(options.size) / f64::from(cells);
        let origin = f64::from(options.margin) * scale;

        surface.clear(options.size, options.light)?;

        for y in 0..grid.width() {
            for x in 0..grid.width() {
                if grid.is_dark(x, y) {
                    surface.fill_rect(
                        origin + x as f64 * scale,
                        origin + y as f64 * scale,
                        scale,
                        scale,
                        options.dark,
                    )?;
                }
            }
        }

        Ok(())
    }
}

impl Default for QrRenderer {
    fn default() -> Self {
        Self::new()
    }
}
