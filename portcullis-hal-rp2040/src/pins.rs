//! Board pin assignments
//!
//! | GPIO | Function                 | Peripheral      |
//! |------|--------------------------|-----------------|
//! | 2    | Open LED                 | output          |
//! | 4    | Closed LED               | output          |
//! | 12   | OPEN button              | input, pull-up  |
//! | 13   | CLOSE button             | input, pull-up  |
//! | 14   | EMERGENCY button         | input, pull-up  |
//! | 15   | Servo signal             | PWM slice 7, B  |
//! | 18   | Buzzer                   | PWM slice 1, A  |
//!
//! Buttons pull the line low when pressed; every press is a falling edge.
//! The firmware takes these pins from `embassy_rp::Peripherals` by name;
//! the numbers here are used for logging.

pub const LED_OPEN: u8 = 2;
pub const LED_CLOSED: u8 = 4;
pub const BUTTON_OPEN: u8 = 12;
pub const BUTTON_CLOSE: u8 = 13;
pub const BUTTON_EMERGENCY: u8 = 14;
pub const SERVO: u8 = 15;
pub const BUZZER: u8 = 18;
