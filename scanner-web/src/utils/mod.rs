//! Shared helpers

pub mod constants;
