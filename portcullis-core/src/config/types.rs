//! Application configuration types

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::ServoCalibration;
use crate::motion::{MotionProfile, MAX_TRAVEL_DEG};

/// Task timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default, deny_unknown_fields))]
pub struct TimingConfig {
    /// Longest the actuator or emergency task waits for the servo lock (ms)
    pub lock_timeout_ms: u32,
    /// Settle time after homing the servo at startup (ms)
    pub settle_ms: u32,
    /// LED on/off half period while the emergency is active (ms)
    pub blink_half_period_ms: u32,
    /// Indicator poll period when no emergency is active (ms)
    pub indicator_period_ms: u32,
    /// Alert poll period when no emergency is active (ms)
    pub alert_idle_ms: u32,
    /// Button lockout after a dispatched edge (ms)
    pub debounce_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingConfig {
    /// Default timing
    pub const fn new() -> Self {
        Self {
            lock_timeout_ms: 1000,
            settle_ms: 1000,
            blink_half_period_ms: 150,
            indicator_period_ms: 500,
            alert_idle_ms: 1000,
            debounce_ms: 20,
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default, deny_unknown_fields))]
pub struct GateConfig {
    pub timing: TimingConfig,
    pub motion: MotionProfile,
    pub servo: ServoCalibration,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A period or timeout is zero
    ZeroDuration(&'static str),
    /// Waypoints are not strictly increasing from closed to open
    WaypointOrder,
    /// Open waypoint exceeds the mechanical travel limit
    TravelExceeded(u8),
    /// PWM frame rate is zero
    ZeroFrequency,
    /// Pulse window is empty or longer than one PWM frame
    PulseWindow,
    /// Full-scale angle is zero or smaller than the open waypoint
    FullScale(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDuration(field) => write!(f, "{} must be non-zero", field),
            Self::WaypointOrder => {
                write!(f, "motion waypoints must satisfy closed < intermediate < open")
            }
            Self::TravelExceeded(deg) => write!(
                f,
                "open_deg {} exceeds the {} degree travel limit",
                deg, MAX_TRAVEL_DEG
            ),
            Self::ZeroFrequency => write!(f, "servo frequency_hz must be non-zero"),
            Self::PulseWindow => write!(
                f,
                "servo pulse window must satisfy min_pulse_us < max_pulse_us < frame period"
            ),
            Self::FullScale(deg) => write!(
                f,
                "servo full_scale_deg {} must be non-zero and cover the open waypoint",
                deg
            ),
        }
    }
}

impl GateConfig {
    /// Default configuration
    pub const fn new() -> Self {
        Self {
            timing: TimingConfig::new(),
            motion: MotionProfile::new(),
            servo: ServoCalibration::new(),
        }
    }

    /// Check the configuration for values the tasks cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        for (field, value) in [
            ("lock_timeout_ms", t.lock_timeout_ms),
            ("blink_half_period_ms", t.blink_half_period_ms),
            ("indicator_period_ms", t.indicator_period_ms),
            ("alert_idle_ms", t.alert_idle_ms),
            ("step_interval_ms", self.motion.step_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDuration(field));
            }
        }

        let m = &self.motion;
        if m.open_deg > MAX_TRAVEL_DEG {
            return Err(ConfigError::TravelExceeded(m.open_deg));
        }
        if !m.is_valid() {
            return Err(ConfigError::WaypointOrder);
        }

        let s = &self.servo;
        if s.frequency_hz == 0 {
            return Err(ConfigError::ZeroFrequency);
        }
        if s.min_pulse_us >= s.max_pulse_us || s.max_pulse_us >= s.period_us() {
            return Err(ConfigError::PulseWindow);
        }
        if s.full_scale_deg == 0 || s.full_scale_deg < m.open_deg {
            return Err(ConfigError::FullScale(s.full_scale_deg));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GateConfig::new().validate(), Ok(()));
        assert_eq!(GateConfig::default(), GateConfig::new());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = GateConfig::new();
        config.timing.lock_timeout_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration("lock_timeout_ms"))
        );
    }

    #[test]
    fn test_zero_settle_and_debounce_allowed() {
        let mut config = GateConfig::new();
        config.timing.settle_ms = 0;
        config.timing.debounce_ms = 0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_waypoint_order_rejected() {
        let mut config = GateConfig::new();
        config.motion.intermediate_deg = 90;
        assert_eq!(config.validate(), Err(ConfigError::WaypointOrder));
    }

    #[test]
    fn test_overtravel_rejected() {
        let mut config = GateConfig::new();
        config.motion.open_deg = 100;
        assert_eq!(config.validate(), Err(ConfigError::TravelExceeded(100)));
    }

    #[test]
    fn test_pulse_window_rejected() {
        let mut config = GateConfig::new();
        config.servo.max_pulse_us = 400;
        assert_eq!(config.validate(), Err(ConfigError::PulseWindow));

        let mut config = GateConfig::new();
        config.servo.frequency_hz = 500;
        assert_eq!(config.validate(), Err(ConfigError::PulseWindow));

        let mut config = GateConfig::new();
        config.servo.frequency_hz = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrequency));
    }

    #[test]
    fn test_full_scale_must_cover_travel() {
        let mut config = GateConfig::new();
        config.servo.full_scale_deg = 60;
        assert_eq!(config.validate(), Err(ConfigError::FullScale(60)));
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let message = ConfigError::ZeroDuration("alert_idle_ms").to_string();
        assert!(message.contains("alert_idle_ms"));
    }
}
