//! Application constants

/// The sole payload encoded into the QR image and the sole navigation target
pub const ANNIVERSARY_URL: &str = "https://aaniversary-eight.vercel.app/";

// QR presentation
pub const QR_SIZE: u32 = 200;
pub const QR_MARGIN_MODULES: u32 = 2;

// Hearts overlay
pub const HEART_COUNT: usize = 15;
pub const HEART_MAX_DELAY_SECONDS: f64 = 5.0;

// Delay between the simulated scan and opening the link
pub const OPEN_DELAY_MS: u32 = 1000;
