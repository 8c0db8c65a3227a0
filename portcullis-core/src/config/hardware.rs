//! Servo calibration
//!
//! Maps gate angles to PWM pulse widths for a hobby servo.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::motion::MAX_TRAVEL_DEG;

/// Pulse-width calibration for the gate servo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default, deny_unknown_fields))]
pub struct ServoCalibration {
    /// PWM frame rate (Hz)
    pub frequency_hz: u32,
    /// Pulse width at 0 degrees (us)
    pub min_pulse_us: u32,
    /// Pulse width at `full_scale_deg` (us)
    pub max_pulse_us: u32,
    /// Angle reached at `max_pulse_us` (degrees)
    pub full_scale_deg: u8,
}

impl Default for ServoCalibration {
    fn default() -> Self {
        Self::new()
    }
}

impl ServoCalibration {
    /// Standard hobby servo: 50 Hz, 500-2500 us over 180 degrees
    pub const fn new() -> Self {
        Self {
            frequency_hz: 50,
            min_pulse_us: 500,
            max_pulse_us: 2500,
            full_scale_deg: 180,
        }
    }

    /// PWM frame period (us)
    pub fn period_us(&self) -> u32 {
        1_000_000 / self.frequency_hz.max(1)
    }

    /// Pulse width for an angle (us)
    ///
    /// Angles above the gate's travel limit are clamped to it.
    pub fn pulse_us(&self, degrees: u8) -> u32 {
        let degrees = u32::from(degrees.min(MAX_TRAVEL_DEG));
        let span = self.max_pulse_us.saturating_sub(self.min_pulse_us);
        self.min_pulse_us + degrees * span / u32::from(self.full_scale_deg.max(1))
    }

    /// Duty-cycle count for an angle, given the PWM counter's full scale
    pub fn duty(&self, degrees: u8, max_duty: u16) -> u16 {
        let duty = u64::from(self.pulse_us(degrees)) * u64::from(max_duty)
            / u64::from(self.period_us());
        duty.min(u64::from(max_duty)) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_endpoints() {
        let cal = ServoCalibration::new();
        assert_eq!(cal.pulse_us(0), 500);
        assert_eq!(cal.pulse_us(45), 1000);
        assert_eq!(cal.pulse_us(90), 1500);
    }

    #[test]
    fn test_pulse_clamped_to_travel() {
        let cal = ServoCalibration::new();
        assert_eq!(cal.pulse_us(180), cal.pulse_us(MAX_TRAVEL_DEG));
        assert_eq!(cal.pulse_us(255), 1500);
    }

    #[test]
    fn test_duty_scales_with_counter() {
        let cal = ServoCalibration::new();
        assert_eq!(cal.period_us(), 20_000);
        // 1500 us of a 20 ms frame is 7.5%
        assert_eq!(cal.duty(90, 20_000), 1500);
        assert_eq!(cal.duty(0, 40_000), 1000);
    }
}
