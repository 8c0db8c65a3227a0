//! Audible cues
//!
//! Every cue is a short, fixed sequence of [`Tone`]s. The buzzer is shared
//! by the actuator, emergency and alert tasks. Each tone start/stop is a
//! single short critical section, so cues from different tasks may
//! interleave but never corrupt the PWM state.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embedded_hal_async::delay::DelayNs;

use crate::command::GateCommand;
use crate::traits::ToneOutput;

/// One beep followed by an optional silence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub freq_hz: u32,
    pub on_ms: u32,
    pub rest_ms: u32,
}

impl Tone {
    const fn new(freq_hz: u32, on_ms: u32, rest_ms: u32) -> Self {
        Self {
            freq_hz,
            on_ms,
            rest_ms,
        }
    }
}

const PRE_MOVE: [Tone; 1] = [Tone::new(1200, 30, 0)];
const OPENED: [Tone; 1] = [Tone::new(1500, 100, 0)];
const CLOSED: [Tone; 1] = [Tone::new(1200, 100, 0)];
const ALREADY_THERE: [Tone; 1] = [Tone::new(800, 30, 0)];
const BLOCKED: [Tone; 2] = [Tone::new(800, 50, 50), Tone::new(800, 50, 0)];
const EMERGENCY_ON: [Tone; 1] = [Tone::new(3000, 200, 0)];
const EMERGENCY_OFF: [Tone; 1] = [Tone::new(1500, 100, 0)];
const STARTUP: [Tone; 3] = [
    Tone::new(1500, 100, 100),
    Tone::new(1500, 100, 100),
    Tone::new(1500, 100, 0),
];
const ALARM_PULSE: [Tone; 1] = [Tone::new(2500, 80, 80)];

/// Named cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Motion is about to start
    PreMove,
    /// Gate reached the open position
    Opened,
    /// Gate reached the closed position
    Closed,
    /// Command matched the current position
    AlreadyThere,
    /// Command refused by the emergency interlock
    Blocked,
    /// Emergency interlock engaged
    EmergencyOn,
    /// Emergency interlock released
    EmergencyOff,
    /// Power-on chirp
    Startup,
    /// One period of the emergency alarm
    AlarmPulse,
}

impl Cue {
    /// Tone sequence for this cue
    pub fn tones(self) -> &'static [Tone] {
        match self {
            Cue::PreMove => &PRE_MOVE,
            Cue::Opened => &OPENED,
            Cue::Closed => &CLOSED,
            Cue::AlreadyThere => &ALREADY_THERE,
            Cue::Blocked => &BLOCKED,
            Cue::EmergencyOn => &EMERGENCY_ON,
            Cue::EmergencyOff => &EMERGENCY_OFF,
            Cue::Startup => &STARTUP,
            Cue::AlarmPulse => &ALARM_PULSE,
        }
    }

    /// Completion cue for a finished move
    pub fn completion(command: GateCommand) -> Self {
        match command {
            GateCommand::Open => Cue::Opened,
            GateCommand::Close => Cue::Closed,
        }
    }
}

/// Tone output shared between tasks
pub struct Buzzer<M: RawMutex, T> {
    output: BlockingMutex<M, RefCell<T>>,
}

impl<M: RawMutex, T> Buzzer<M, T> {
    pub const fn new(output: T) -> Self {
        Self {
            output: BlockingMutex::new(RefCell::new(output)),
        }
    }

    /// Run a closure with exclusive access to the output
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.output.lock(|cell| f(&mut *cell.borrow_mut()))
    }
}

impl<M: RawMutex, T: ToneOutput> Buzzer<M, T> {
    /// Play a cue to completion
    ///
    /// The output is only locked while switching a tone on or off; the
    /// tone and rest durations are awaited with the lock released.
    pub async fn play<D: DelayNs>(&self, cue: Cue, delay: &mut D) {
        for tone in cue.tones() {
            self.with(|out| out.start(tone.freq_hz));
            delay.delay_ms(tone.on_ms).await;
            self.with(|out| out.stop());
            if tone.rest_ms > 0 {
                delay.delay_ms(tone.rest_ms).await;
            }
        }
    }
}
