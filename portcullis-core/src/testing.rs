//! Host test doubles
//!
//! Shared by the unit tests and, through the `testing` feature, by the
//! integration tests under `tests/`.

extern crate std;

use std::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

use core::convert::Infallible;

use embassy_futures::yield_now;
use embedded_hal::digital::ErrorType;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::digital::Wait;

use crate::traits::{IndicatorPair, ServoDriver, ToneOutput};

/// Delay on a virtual clock
///
/// Yields once per 10 ms of requested time (at least once) and advances
/// the clock after each yield, so concurrent futures interleave roughly in
/// proportion to their delays and a cancelled delay only counts the time
/// it actually waited.
#[derive(Clone, Default)]
pub struct VirtualDelay {
    now_ms: Rc<Cell<u64>>,
}

impl VirtualDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.now_ms.get()
    }

    async fn advance(&mut self, ms: u64) {
        let steps = (ms / 10).max(1);
        for step in 0..steps {
            yield_now().await;
            let tick = if step + 1 == steps { ms - 10 * (steps - 1) } else { 10 };
            self.now_ms.set(self.now_ms.get() + tick);
        }
    }
}

impl DelayNs for VirtualDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.advance(u64::from(ns) / 1_000_000).await
    }

    async fn delay_us(&mut self, us: u32) {
        self.advance(u64::from(us) / 1_000).await
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.advance(u64::from(ms)).await
    }
}

#[derive(Debug, Default)]
pub struct RecordingServo {
    pub angles: Vec<u8>,
}

impl ServoDriver for RecordingServo {
    fn set_angle(&mut self, degrees: u8) {
        self.angles.push(degrees);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneEvent {
    Start(u32),
    Stop,
}

#[derive(Debug, Default)]
pub struct RecordingTone {
    pub events: Vec<ToneEvent>,
}

impl RecordingTone {
    pub fn started(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ToneEvent::Start(freq) => Some(*freq),
                ToneEvent::Stop => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_sounding(&self) -> bool {
        matches!(self.events.last(), Some(ToneEvent::Start(_)))
    }
}

impl ToneOutput for RecordingTone {
    fn start(&mut self, freq_hz: u32) {
        self.events.push(ToneEvent::Start(freq_hz));
    }

    fn stop(&mut self) {
        self.events.push(ToneEvent::Stop);
    }
}

#[derive(Debug, Default)]
pub struct RecordingLeds {
    pub frames: Vec<(bool, bool)>,
}

impl IndicatorPair for RecordingLeds {
    fn show(&mut self, open_lit: bool, closed_lit: bool) {
        self.frames.push((open_lit, closed_lit));
    }
}

/// Input pin whose level is set by the test
///
/// Clones share the level. Waits poll it once per yield.
#[derive(Debug, Clone)]
pub struct ScriptedPin {
    high: Rc<Cell<bool>>,
}

impl ScriptedPin {
    pub fn new(high: bool) -> Self {
        Self {
            high: Rc::new(Cell::new(high)),
        }
    }

    pub fn set(&self, high: bool) {
        self.high.set(high);
    }

    async fn wait_level(&self, high: bool) {
        while self.high.get() != high {
            yield_now().await;
        }
    }
}

impl ErrorType for ScriptedPin {
    type Error = Infallible;
}

impl Wait for ScriptedPin {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        self.wait_level(true).await;
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        self.wait_level(false).await;
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        self.wait_level(false).await;
        self.wait_level(true).await;
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        self.wait_level(true).await;
        self.wait_level(false).await;
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        let start = self.high.get();
        self.wait_level(!start).await;
        Ok(())
    }
}
