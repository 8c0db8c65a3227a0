//! RP2040-specific HAL for the gate controller firmware
//!
//! This crate provides RP2040-specific implementations:
//! - Board pin assignments
//! - PWM slice configuration for a given output frequency
//! - Piezo buzzer on a PWM slice

#![no_std]

pub mod buzzer;
pub mod pins;
pub mod pwm;

pub use buzzer::PwmBuzzer;
