//! Process-wide gate state
//!
//! Two flags are shared by all tasks: the gate position and the emergency
//! interlock. Each has exactly one writer; every other task reads a
//! [`Snapshot`] by value.

pub mod flags;

pub use flags::{GateFlags, Snapshot};
