//! Embassy async tasks
//!
//! Thin wrappers that bind the core task bodies to the RP2040 peripherals
//! and the static bus, and log each outcome.

pub mod actuator;
pub mod alert;
pub mod edge;
pub mod emergency;
pub mod indicator;

pub use actuator::actuator_task;
pub use alert::alert_task;
pub use edge::edge_task;
pub use emergency::emergency_task;
pub use indicator::indicator_task;
