//! Button edge watcher
//!
//! One watcher per input line. A falling edge is dispatched to the bus as
//! soon as it is seen. The line is then disarmed until the button has been
//! released and stayed high for `debounce_ms`, so chatter on either the
//! press or the release never dispatches a second edge.
//!
//! A watcher starts disarmed: a button held at power-on is not a press.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

use crate::bus::{EdgeOutcome, GateBus};
use crate::command::InputLine;
use crate::config::TimingConfig;

/// Debounced edge source for one active-low button
pub struct EdgeWatcher<'a, M: RawMutex, P, D> {
    bus: &'a GateBus<M>,
    line: InputLine,
    pin: P,
    delay: D,
    debounce_ms: u32,
    armed: bool,
}

impl<'a, M, P, D> EdgeWatcher<'a, M, P, D>
where
    M: RawMutex,
    P: Wait,
    D: DelayNs,
{
    pub fn new(bus: &'a GateBus<M>, line: InputLine, pin: P, delay: D, timing: &TimingConfig) -> Self {
        Self {
            bus,
            line,
            pin,
            delay,
            debounce_ms: timing.debounce_ms,
            armed: false,
        }
    }

    /// Wait for the next press and dispatch it
    pub async fn next_press(&mut self) -> Result<EdgeOutcome, P::Error> {
        if !self.armed {
            self.settle_release().await?;
            self.armed = true;
        }

        self.pin.wait_for_falling_edge().await?;
        self.armed = false;
        Ok(self.bus.on_edge(self.line))
    }

    /// Wait until the line has been high for a full debounce window
    async fn settle_release(&mut self) -> Result<(), P::Error> {
        loop {
            self.pin.wait_for_high().await?;
            match select(self.pin.wait_for_low(), self.delay.delay_ms(self.debounce_ms)).await {
                Either::First(bounced) => bounced?,
                Either::Second(()) => return Ok(()),
            }
        }
    }

    /// Dispatch presses forever, reporting each outcome
    ///
    /// A pin error disarms the line and backs off for one debounce window.
    pub async fn run(mut self, mut report: impl FnMut(InputLine, EdgeOutcome)) -> ! {
        loop {
            match self.next_press().await {
                Ok(outcome) => report(self.line, outcome),
                Err(_) => {
                    self.armed = false;
                    self.delay.delay_ms(self.debounce_ms.max(1)).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::GateCommand;
    use crate::testing::{ScriptedPin, VirtualDelay};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

    type Raw = CriticalSectionRawMutex;

    /// Play a level script against a watcher and collect its outcomes
    fn replay(bus: &GateBus<Raw>, line: InputLine, script: &[(bool, u32)]) -> Vec<EdgeOutcome> {
        let pin = ScriptedPin::new(true);
        let level = pin.clone();
        let mut watcher = EdgeWatcher::new(bus, line, pin, VirtualDelay::new(), &TimingConfig::new());
        let mut outcomes = Vec::new();

        block_on(select(
            async {
                loop {
                    outcomes.push(watcher.next_press().await.unwrap());
                }
            },
            async {
                let mut delay = VirtualDelay::new();
                for &(high, ms) in script {
                    level.set(high);
                    delay.delay_ms(ms).await;
                }
            },
        ));

        outcomes
    }

    #[test]
    fn test_single_press_dispatched_once() {
        let bus = GateBus::<Raw>::new();
        let script = [(true, 50), (false, 200), (true, 100)];

        let outcomes = replay(&bus, InputLine::Open, &script);

        assert_eq!(outcomes, [EdgeOutcome::Queued(GateCommand::Open)]);
        assert_eq!(bus.pending_commands(), 1);
    }

    #[test]
    fn test_release_chatter_not_dispatched() {
        let bus = GateBus::<Raw>::new();
        // Press with bounce, hold, then a chattering release
        let script = [
            (true, 50),
            (false, 5),
            (true, 5),
            (false, 200),
            (true, 5),
            (false, 5),
            (true, 5),
            (false, 5),
            (true, 100),
        ];

        let outcomes = replay(&bus, InputLine::Emergency, &script);

        assert_eq!(outcomes, [EdgeOutcome::EmergencyPosted]);
        assert!(bus.take_emergency());
        assert!(!bus.take_emergency());
    }

    #[test]
    fn test_separate_presses_both_dispatched() {
        let bus = GateBus::<Raw>::new();
        let script = [(true, 50), (false, 100), (true, 100), (false, 100), (true, 50)];

        let outcomes = replay(&bus, InputLine::Close, &script);

        assert_eq!(
            outcomes,
            [
                EdgeOutcome::Queued(GateCommand::Close),
                EdgeOutcome::Queued(GateCommand::Close),
            ]
        );
    }

    #[test]
    fn test_button_held_at_startup_ignored() {
        let bus = GateBus::<Raw>::new();
        let script = [(false, 100), (true, 100)];

        let outcomes = replay(&bus, InputLine::Open, &script);

        assert!(outcomes.is_empty());
        assert_eq!(bus.pending_commands(), 0);
    }
}
