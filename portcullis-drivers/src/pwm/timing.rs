//! Divider and wrap value for a 16-bit PWM counter
//!
//! The counter runs at `clk / divider` and wraps after `top + 1` counts, so
//! the output frequency is `clk / (divider * (top + 1))`. The smallest
//! integer divider that fits the period into 16 bits is chosen, which
//! gives the finest duty resolution.

/// Integer divider and wrap value for one output frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmTiming {
    pub divider: u8,
    pub top: u16,
}

impl PwmTiming {
    /// Timing for `freq_hz` on a counter clocked at `clk_hz`
    ///
    /// Returns `None` if the frequency is zero, above the clock, or too
    /// low to reach with an 8-bit divider.
    pub fn for_frequency(clk_hz: u32, freq_hz: u32) -> Option<Self> {
        if freq_hz == 0 || freq_hz > clk_hz / 2 {
            return None;
        }

        let counts = clk_hz / freq_hz;
        let divider = counts / (u32::from(u16::MAX) + 1) + 1;
        if divider > u32::from(u8::MAX) {
            return None;
        }

        let top = clk_hz / (freq_hz * divider) - 1;
        Some(Self {
            divider: divider as u8,
            top: top as u16,
        })
    }

    /// Compare value for a 50% square wave
    pub fn half_duty(&self) -> u16 {
        ((u32::from(self.top) + 1) / 2) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLK_HZ: u32 = 125_000_000;

    /// Actual output frequency (Hz)
    fn frequency(timing: PwmTiming) -> u32 {
        CLK_HZ / (u32::from(timing.divider) * (u32::from(timing.top) + 1))
    }

    #[test]
    fn test_servo_frame() {
        let timing = PwmTiming::for_frequency(CLK_HZ, 50).unwrap();
        assert_eq!(timing.divider, 39);
        assert_eq!(timing.top, 64_101);
        assert_eq!(frequency(timing), 50);
    }

    #[test]
    fn test_audio_tones_are_accurate() {
        for freq in [800, 1200, 1500, 2500, 3000] {
            let timing = PwmTiming::for_frequency(CLK_HZ, freq).unwrap();
            assert!(timing.divider <= 3, "{} Hz", freq);
            let actual = frequency(timing);
            assert!(actual.abs_diff(freq) <= 1, "{} Hz -> {} Hz", freq, actual);
        }
    }

    #[test]
    fn test_half_duty() {
        let timing = PwmTiming { divider: 1, top: 99 };
        assert_eq!(timing.half_duty(), 50);
    }

    #[test]
    fn test_unreachable_frequencies() {
        assert_eq!(PwmTiming::for_frequency(CLK_HZ, 0), None);
        assert_eq!(PwmTiming::for_frequency(CLK_HZ, 5), None);
        assert_eq!(PwmTiming::for_frequency(CLK_HZ, CLK_HZ), None);
    }
}
