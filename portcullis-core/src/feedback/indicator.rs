//! Position indicator LEDs
//!
//! | Snapshot              | Open LED | Closed LED | Cycle                        |
//! |-----------------------|----------|------------|------------------------------|
//! | emergency             | blink    | blink      | on half period, off half period |
//! | open, no emergency    | on       | off        | poll period or refresh       |
//! | closed, no emergency  | off      | on         | poll period or refresh       |
//!
//! The indicator owns both LEDs. The actuator posts a refresh after each
//! completed move so the LEDs change without waiting a full poll period.

use embassy_futures::select::select;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::bus::GateBus;
use crate::config::TimingConfig;
use crate::state::Snapshot;
use crate::traits::IndicatorPair;

/// What the LEDs show for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorPattern {
    /// Fixed levels until the next poll or refresh
    Steady { open_lit: bool, closed_lit: bool },
    /// Both LEDs blink together
    Blink,
}

impl IndicatorPattern {
    /// Pattern for a flag snapshot
    pub fn for_snapshot(snapshot: Snapshot) -> Self {
        if snapshot.emergency {
            IndicatorPattern::Blink
        } else {
            IndicatorPattern::Steady {
                open_lit: snapshot.is_open,
                closed_lit: !snapshot.is_open,
            }
        }
    }
}

/// Indicator task body
pub struct Indicator<'a, M: RawMutex, L, D> {
    bus: &'a GateBus<M>,
    leds: L,
    delay: D,
    blink_half_period_ms: u32,
    period_ms: u32,
}

impl<'a, M, L, D> Indicator<'a, M, L, D>
where
    M: RawMutex,
    L: IndicatorPair,
    D: DelayNs,
{
    pub fn new(bus: &'a GateBus<M>, leds: L, delay: D, timing: &TimingConfig) -> Self {
        Self {
            bus,
            leds,
            delay,
            blink_half_period_ms: timing.blink_half_period_ms,
            period_ms: timing.indicator_period_ms,
        }
    }

    /// Read the flags once and drive the LEDs for one cycle
    pub async fn cycle(&mut self) -> IndicatorPattern {
        let pattern = IndicatorPattern::for_snapshot(self.bus.flags().snapshot());

        match pattern {
            IndicatorPattern::Blink => {
                self.leds.show(true, true);
                self.delay.delay_ms(self.blink_half_period_ms).await;
                self.leds.show(false, false);
                self.delay.delay_ms(self.blink_half_period_ms).await;
            }
            IndicatorPattern::Steady {
                open_lit,
                closed_lit,
            } => {
                self.leds.show(open_lit, closed_lit);
                select(
                    self.delay.delay_ms(self.period_ms),
                    self.bus.wait_refresh(),
                )
                .await;
            }
        }

        pattern
    }

    pub async fn run(mut self) -> ! {
        loop {
            self.cycle().await;
        }
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }
}
