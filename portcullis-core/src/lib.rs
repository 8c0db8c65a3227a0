//! Board-agnostic core logic for the gate controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (servo, tone output, indicator LEDs)
//! - Command channel, emergency signal and edge dispatch
//! - Debounced button edge watcher
//! - Shared gate/emergency flags with single-writer discipline
//! - Actuator task: emergency interlock, bounded lock, motion profile
//! - Emergency task: toggle, actuator fence, alert cues
//! - Indicator and alert pollers
//! - Task placement (core affinity and priority ranks)
//! - Configuration type definitions
//!
//! Task bodies are generic over [`embassy_sync`] raw mutexes and
//! [`embedded_hal_async::delay::DelayNs`], so the same code runs on the
//! target executors and in host tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuator;
pub mod bus;
pub mod command;
pub mod config;
pub mod feedback;
pub mod input;
pub mod motion;
pub mod safety;
pub mod scheduler;
pub mod state;
pub mod traits;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use actuator::{Actuator, ActuatorPhase, CommandOutcome};
pub use bus::{EdgeOutcome, GateBus, COMMAND_QUEUE_DEPTH};
pub use command::{GateCommand, InputLine};
pub use config::GateConfig;
pub use input::EdgeWatcher;
pub use safety::{EmergencyMonitor, EmergencyOutcome};
pub use state::{GateFlags, Snapshot};
