//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod feedback;
pub mod servo;

pub use feedback::{IndicatorPair, ToneOutput};
pub use servo::ServoDriver;
