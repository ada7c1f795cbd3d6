//! Drawable surface contract

use crate::error::Result;
use crate::options::Rgb;

/// A caller-supplied drawable surface the renderer paints onto.
///
/// The renderer never owns a surface; one is handed in per draw, which lets
/// tests substitute an in-memory implementation for the browser canvas.
pub trait Surface {
    /// Resize to `side` x `side` pixels and fill with the background color
    fn clear(&mut self, side: u32, background: Rgb) -> Result<()>;

    /// Fill an axis-aligned rectangle with the given color
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) -> Result<()>;
}
