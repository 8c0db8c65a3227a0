//! Shared gate and emergency flags
//!
//! | Flag        | Writer                              | Readers                      |
//! |-------------|-------------------------------------|------------------------------|
//! | `open`      | actuator task, holding the servo lock | indicator task             |
//! | `emergency` | emergency task                      | actuator, indicator, alert   |
//!
//! Readers load without taking any lock. A reader may see a value that is
//! one poll period stale, which is acceptable for LEDs and the alarm
//! pattern. The actuator's interlock check reads at dequeue time.
//!
//! The writers are `pub(crate)`, so only the actuator and emergency tasks
//! in this crate can mutate the flags.

use core::sync::atomic::{AtomicBool, Ordering};

/// By-value view of the shared flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Gate is in the open position
    pub is_open: bool,
    /// Emergency interlock is active
    pub emergency: bool,
}

/// Process-wide gate flags
///
/// Both flags start `false` (closed, no emergency).
#[derive(Debug)]
pub struct GateFlags {
    open: AtomicBool,
    emergency: AtomicBool,
}

impl Default for GateFlags {
    fn default() -> Self {
        Self::new()
    }
}

impl GateFlags {
    /// Create flags in the power-on state
    pub const fn new() -> Self {
        Self {
            open: AtomicBool::new(false),
            emergency: AtomicBool::new(false),
        }
    }

    /// Take a by-value copy of both flags
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            is_open: self.is_open(),
            emergency: self.emergency_active(),
        }
    }

    /// Check if the gate is open
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Check if the emergency interlock is active
    pub fn emergency_active(&self) -> bool {
        self.emergency.load(Ordering::Acquire)
    }

    /// Record the gate position
    ///
    /// Only called by the actuator while it holds the servo lock.
    pub(crate) fn store_open(&self, open: bool) {
        self.open.store(open, Ordering::Release);
    }

    /// Flip the emergency flag and return the new value
    ///
    /// Load and store are separate operations (no CAS on thumbv6m). This is
    /// sound only because the emergency task is the single writer.
    pub(crate) fn toggle_emergency(&self) -> bool {
        let active = !self.emergency.load(Ordering::Acquire);
        self.emergency.store(active, Ordering::Release);
        active
    }
}
