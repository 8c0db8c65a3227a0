//! Indicator LED drivers

pub mod led;

pub use led::LedPair;
