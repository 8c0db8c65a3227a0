//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware build script
//! parses `gate.toml` into a [`GateConfig`], validates it and bakes the
//! result into the binary as a `const`.

pub mod hardware;
pub mod report;
pub mod types;

pub use hardware::*;
pub use report::ellipsize;
pub use types::*;
