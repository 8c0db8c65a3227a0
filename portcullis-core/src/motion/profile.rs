//! Three-point motion profile

use crate::command::GateCommand;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mechanical travel limit of the gate arm (degrees)
///
/// Every angle written to the servo is clamped to `0..=MAX_TRAVEL_DEG`.
pub const MAX_TRAVEL_DEG: u8 = 90;

/// Number of waypoints in one move
pub const WAYPOINT_COUNT: usize = 3;

/// Waypoint angles and step timing for one gate move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default, deny_unknown_fields))]
pub struct MotionProfile {
    /// Closed position (degrees)
    pub closed_deg: u8,
    /// Midpoint passed through in both directions (degrees)
    pub intermediate_deg: u8,
    /// Open position (degrees)
    pub open_deg: u8,
    /// Pause between consecutive waypoints (ms)
    pub step_interval_ms: u32,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionProfile {
    /// Default profile: 0, 45, 90 degrees, 200 ms per step
    pub const fn new() -> Self {
        Self {
            closed_deg: 0,
            intermediate_deg: 45,
            open_deg: 90,
            step_interval_ms: 200,
        }
    }

    /// Resting angle for a gate position
    pub fn rest_angle(&self, open: bool) -> u8 {
        if open {
            self.open_deg
        } else {
            self.closed_deg
        }
    }

    /// Waypoints for a command, starting at the opposite end
    ///
    /// Open runs closed, intermediate, open. Close runs the reverse.
    pub fn waypoints(&self, command: GateCommand) -> [u8; WAYPOINT_COUNT] {
        match command {
            GateCommand::Open => [self.closed_deg, self.intermediate_deg, self.open_deg],
            GateCommand::Close => [self.open_deg, self.intermediate_deg, self.closed_deg],
        }
    }

    /// Check waypoint ordering and travel limit
    pub fn is_valid(&self) -> bool {
        self.closed_deg < self.intermediate_deg
            && self.intermediate_deg < self.open_deg
            && self.open_deg <= MAX_TRAVEL_DEG
    }
}
