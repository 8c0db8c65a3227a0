//! Piezo buzzer on a PWM slice
//!
//! A tone is a 50% square wave on channel A. Each `start` reprograms the
//! slice divider and wrap for the requested frequency.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use portcullis_core::traits::ToneOutput;
use portcullis_drivers::PwmTiming;

/// Buzzer driven from channel A of a PWM slice
pub struct PwmBuzzer<'d> {
    pwm: Pwm<'d>,
    config: Config,
    clk_hz: u32,
}

impl<'d> PwmBuzzer<'d> {
    /// Wrap a slice created with `Pwm::new_output_a`, starting silent
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = Config::default();
        config.compare_a = 0;
        pwm.set_config(&config);

        Self {
            pwm,
            config,
            clk_hz: clk_sys_freq(),
        }
    }
}

impl ToneOutput for PwmBuzzer<'_> {
    fn start(&mut self, freq_hz: u32) {
        match PwmTiming::for_frequency(self.clk_hz, freq_hz) {
            Some(timing) => {
                self.config.divider = timing.divider.into();
                self.config.top = timing.top;
                self.config.compare_a = timing.half_duty();
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Buzzer: {} Hz out of range", freq_hz);
                self.config.compare_a = 0;
            }
        }
        self.pwm.set_config(&self.config);
    }

    fn stop(&mut self) {
        self.config.compare_a = 0;
        self.pwm.set_config(&self.config);
    }
}
