//! Error types for QR rendering

use thiserror::Error;

/// Result type alias using this crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failures a draw call can produce
#[derive(Error, Debug)]
pub enum Error {
    /// Payload rejected by the encoder (empty, or over capacity for the
    /// configured error-correction level)
    #[error("Failed to encode QR payload: {0}")]
    Encode(String),

    /// Drawable surface unavailable or a draw call was rejected
    #[error("Surface error: {0}")]
    Surface(String),
}
