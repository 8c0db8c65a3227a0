//! PWM slice configuration

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::Config;
use portcullis_drivers::PwmTiming;

/// Slice configuration running at `freq_hz` with both outputs low
///
/// Falls back to the default (free-running, undivided) configuration if
/// the frequency cannot be reached from the system clock.
pub fn frame_config(freq_hz: u32) -> Config {
    let mut config = Config::default();
    if let Some(timing) = PwmTiming::for_frequency(clk_sys_freq(), freq_hz) {
        config.divider = timing.divider.into();
        config.top = timing.top;
    }
    config.compare_a = 0;
    config.compare_b = 0;
    config
}
