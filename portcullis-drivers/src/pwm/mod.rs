//! PWM counter timing

pub mod timing;

pub use timing::PwmTiming;
