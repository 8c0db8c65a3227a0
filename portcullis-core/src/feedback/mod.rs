//! Operator feedback: buzzer cues, position LEDs and the emergency alarm
//!
//! The indicator and alert tasks only read the shared flags. They never
//! take the servo lock, so they cannot delay or block a gate move.

pub mod alert;
pub mod cue;
pub mod indicator;

pub use alert::Alert;
pub use cue::{Buzzer, Cue, Tone};
pub use indicator::{Indicator, IndicatorPattern};
