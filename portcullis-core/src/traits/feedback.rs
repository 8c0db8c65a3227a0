//! Operator feedback traits
//!
//! Audible cues go to a [`ToneOutput`], position and alarm state to an
//! [`IndicatorPair`].

/// Square-wave tone generator (piezo buzzer)
pub trait ToneOutput {
    /// Start emitting a tone at the given frequency
    fn start(&mut self, freq_hz: u32);

    /// Silence the output
    fn stop(&mut self);
}

/// Two position LEDs: "open" and "closed"
pub trait IndicatorPair {
    /// Drive both LEDs (`true` = lit)
    fn show(&mut self, open_lit: bool, closed_lit: bool);
}
