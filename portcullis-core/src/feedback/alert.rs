//! Emergency alarm
//!
//! Plays the startup chirp once, then pulses the buzzer for as long as
//! the emergency interlock is active.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use super::cue::{Buzzer, Cue};
use crate::bus::GateBus;
use crate::config::TimingConfig;
use crate::traits::ToneOutput;

/// Alert task body
pub struct Alert<'a, M: RawMutex, T, D> {
    bus: &'a GateBus<M>,
    buzzer: &'a Buzzer<M, T>,
    delay: D,
    idle_ms: u32,
}

impl<'a, M, T, D> Alert<'a, M, T, D>
where
    M: RawMutex,
    T: ToneOutput,
    D: DelayNs,
{
    pub fn new(bus: &'a GateBus<M>, buzzer: &'a Buzzer<M, T>, delay: D, timing: &TimingConfig) -> Self {
        Self {
            bus,
            buzzer,
            delay,
            idle_ms: timing.alert_idle_ms,
        }
    }

    /// Three short beeps at power-on
    pub async fn chirp(&mut self) {
        self.buzzer.play(Cue::Startup, &mut self.delay).await;
    }

    /// One poll: an alarm pulse if the emergency is active, otherwise an
    /// idle wait. Returns whether the alarm sounded.
    pub async fn cycle(&mut self) -> bool {
        if self.bus.flags().emergency_active() {
            self.buzzer.play(Cue::AlarmPulse, &mut self.delay).await;
            true
        } else {
            self.delay.delay_ms(self.idle_ms).await;
            false
        }
    }

    pub async fn run(mut self) -> ! {
        self.chirp().await;
        loop {
            self.cycle().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingTone, VirtualDelay};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    type Bus = GateBus<CriticalSectionRawMutex>;
    type TestBuzzer = Buzzer<CriticalSectionRawMutex, RecordingTone>;

    #[test]
    fn test_idle_is_silent() {
        let bus = Bus::new();
        let buzzer = TestBuzzer::new(RecordingTone::default());
        let delay = VirtualDelay::new();
        let mut alert = Alert::new(&bus, &buzzer, delay.clone(), &TimingConfig::new());

        assert!(!block_on(alert.cycle()));
        assert!(buzzer.with(|out| out.events.is_empty()));
        assert_eq!(delay.elapsed_ms(), 1000);
    }

    #[test]
    fn test_alarm_pulses_while_emergency() {
        let bus = Bus::new();
        let buzzer = TestBuzzer::new(RecordingTone::default());
        let delay = VirtualDelay::new();
        let mut alert = Alert::new(&bus, &buzzer, delay.clone(), &TimingConfig::new());

        bus.flags().toggle_emergency();
        assert!(block_on(alert.cycle()));
        assert!(block_on(alert.cycle()));

        assert_eq!(buzzer.with(|out| out.started()), vec![2500, 2500]);
        assert_eq!(delay.elapsed_ms(), 320);

        bus.flags().toggle_emergency();
        assert!(!block_on(alert.cycle()));
        assert_eq!(buzzer.with(|out| out.started()).len(), 2);
    }

    #[test]
    fn test_chirp() {
        let bus = Bus::new();
        let buzzer = TestBuzzer::new(RecordingTone::default());
        let mut alert = Alert::new(&bus, &buzzer, VirtualDelay::new(), &TimingConfig::new());

        block_on(alert.chirp());
        assert_eq!(buzzer.with(|out| out.started()), vec![1500, 1500, 1500]);
    }
}
