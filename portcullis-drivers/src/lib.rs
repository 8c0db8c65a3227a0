//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in portcullis-core on top of `embedded-hal` 1.0 pin traits:
//!
//! - Hobby servo on a PWM channel
//! - Open/closed indicator LEDs on two GPIO outputs
//! - Divider/wrap selection for 16-bit PWM counters

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod pwm;
pub mod servo;

pub use indicator::LedPair;
pub use pwm::PwmTiming;
pub use servo::PwmServo;
