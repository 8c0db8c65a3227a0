//! GPIO indicator LEDs
//!
//! Two LEDs, one per gate position, each on its own output pin. The pins
//! can be configured as active-high (default) or active-low.

use embedded_hal::digital::{OutputPin, PinState};
use portcullis_core::traits::IndicatorPair;

/// Open/closed LED pair
pub struct LedPair<A, B> {
    open: A,
    closed: B,
    /// If true, LED lit = pin LOW
    inverted: bool,
    /// Current logical state (open lit, closed lit)
    lit: (bool, bool),
}

impl<A: OutputPin, B: OutputPin> LedPair<A, B> {
    /// Create a new LED pair, both LEDs off
    pub fn new(open: A, closed: B, inverted: bool) -> Self {
        let mut leds = Self {
            open,
            closed,
            inverted,
            lit: (false, false),
        };
        leds.show(false, false);
        leds
    }

    /// Create a new LED pair driven active-high
    pub fn new_active_high(open: A, closed: B) -> Self {
        Self::new(open, closed, false)
    }

    fn level(&self, lit: bool) -> PinState {
        PinState::from(lit != self.inverted)
    }
}

impl<A: OutputPin, B: OutputPin> IndicatorPair for LedPair<A, B> {
    fn show(&mut self, open_lit: bool, closed_lit: bool) {
        self.lit = (open_lit, closed_lit);

        let open = self.level(open_lit);
        let closed = self.level(closed_lit);
        // A failing pin keeps its previous level
        self.open.set_state(open).ok();
        self.closed.set_state(closed).ok();
    }
}
