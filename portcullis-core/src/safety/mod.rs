//! Emergency interlock
//!
//! A binary signal from the emergency button toggles the interlock. While
//! active, the actuator refuses every command, the indicator blinks both
//! LEDs and the alert task sounds the alarm.

pub mod monitor;

pub use monitor::{EmergencyMonitor, EmergencyOutcome};
