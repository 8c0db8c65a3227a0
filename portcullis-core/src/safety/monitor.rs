//! Emergency monitor implementation
//!
//! On each emergency post the monitor flips the interlock flag. When the
//! interlock engages it also briefly takes the servo lock. Any move
//! already in progress finishes first, and no new move can start
//! afterwards because the actuator checks the flag before locking.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::actuator::{lock_within, ServoLock};
use crate::bus::GateBus;
use crate::config::TimingConfig;
use crate::feedback::{Buzzer, Cue};
use crate::traits::ToneOutput;

/// Result of one emergency toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EmergencyOutcome {
    /// Interlock engaged. `fenced` is false if the servo lock could not be
    /// taken within the timeout; the interlock is active either way.
    Activated { fenced: bool },
    /// Interlock released
    Deactivated,
}

impl EmergencyOutcome {
    pub fn active(&self) -> bool {
        matches!(self, EmergencyOutcome::Activated { .. })
    }
}

/// Emergency task body
pub struct EmergencyMonitor<'a, M: RawMutex, S, T, D> {
    bus: &'a GateBus<M>,
    servo: &'a ServoLock<M, S>,
    buzzer: &'a Buzzer<M, T>,
    delay: D,
    lock_timeout_ms: u32,
}

impl<'a, M, S, T, D> EmergencyMonitor<'a, M, S, T, D>
where
    M: RawMutex,
    T: ToneOutput,
    D: DelayNs,
{
    pub fn new(
        bus: &'a GateBus<M>,
        servo: &'a ServoLock<M, S>,
        buzzer: &'a Buzzer<M, T>,
        delay: D,
        timing: &TimingConfig,
    ) -> Self {
        Self {
            bus,
            servo,
            buzzer,
            delay,
            lock_timeout_ms: timing.lock_timeout_ms,
        }
    }

    /// Toggle the interlock once
    pub async fn handle(&mut self) -> EmergencyOutcome {
        if self.bus.flags().toggle_emergency() {
            let fenced = lock_within(self.servo, &mut self.delay, self.lock_timeout_ms)
                .await
                .is_some();
            self.buzzer.play(Cue::EmergencyOn, &mut self.delay).await;
            EmergencyOutcome::Activated { fenced }
        } else {
            self.buzzer.play(Cue::EmergencyOff, &mut self.delay).await;
            EmergencyOutcome::Deactivated
        }
    }

    /// Wait for emergency posts forever, reporting each toggle
    pub async fn run(mut self, mut report: impl FnMut(EmergencyOutcome)) -> ! {
        loop {
            self.bus.wait_emergency().await;
            let outcome = self.handle().await;
            report(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingTone, VirtualDelay};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::mutex::Mutex;

    type Raw = CriticalSectionRawMutex;

    #[test]
    fn test_toggle_on_and_off() {
        let bus: GateBus<Raw> = GateBus::new();
        let servo: ServoLock<Raw, ()> = Mutex::new(());
        let buzzer: Buzzer<Raw, _> = Buzzer::new(RecordingTone::default());
        let mut monitor =
            EmergencyMonitor::new(&bus, &servo, &buzzer, VirtualDelay::new(), &TimingConfig::new());

        assert_eq!(
            block_on(monitor.handle()),
            EmergencyOutcome::Activated { fenced: true }
        );
        assert!(bus.flags().emergency_active());

        assert_eq!(block_on(monitor.handle()), EmergencyOutcome::Deactivated);
        assert!(!bus.flags().emergency_active());

        assert_eq!(buzzer.with(|out| out.started()), vec![3000, 1500]);
    }

    #[test]
    fn test_fence_timeout_still_activates() {
        let bus: GateBus<Raw> = GateBus::new();
        let servo: ServoLock<Raw, ()> = Mutex::new(());
        let buzzer: Buzzer<Raw, _> = Buzzer::new(RecordingTone::default());
        let delay = VirtualDelay::new();
        let mut monitor =
            EmergencyMonitor::new(&bus, &servo, &buzzer, delay.clone(), &TimingConfig::new());

        let held = servo.try_lock().unwrap();
        let outcome = block_on(monitor.handle());
        drop(held);

        assert_eq!(outcome, EmergencyOutcome::Activated { fenced: false });
        assert!(outcome.active());
        assert!(bus.flags().emergency_active());
        // fence timeout plus the emergency-on cue
        assert_eq!(delay.elapsed_ms(), 1000 + 200);
    }

    #[test]
    fn test_fence_is_released() {
        let bus: GateBus<Raw> = GateBus::new();
        let servo: ServoLock<Raw, ()> = Mutex::new(());
        let buzzer: Buzzer<Raw, _> = Buzzer::new(RecordingTone::default());
        let mut monitor =
            EmergencyMonitor::new(&bus, &servo, &buzzer, VirtualDelay::new(), &TimingConfig::new());

        block_on(monitor.handle());
        assert!(servo.try_lock().is_ok());
    }

    #[test]
    fn test_deactivation_does_not_touch_servo() {
        let bus: GateBus<Raw> = GateBus::new();
        let servo: ServoLock<Raw, ()> = Mutex::new(());
        let buzzer: Buzzer<Raw, _> = Buzzer::new(RecordingTone::default());
        let mut monitor =
            EmergencyMonitor::new(&bus, &servo, &buzzer, VirtualDelay::new(), &TimingConfig::new());

        block_on(monitor.handle());
        let held = servo.try_lock().unwrap();
        assert_eq!(block_on(monitor.handle()), EmergencyOutcome::Deactivated);
        drop(held);
    }
}
