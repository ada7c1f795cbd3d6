//! UI Components

pub mod flying_hearts;
pub mod qr_code;

pub use flying_hearts::FlyingHearts;
pub use qr_code::QrCode;
