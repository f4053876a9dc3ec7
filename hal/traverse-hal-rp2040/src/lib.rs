//! RP2040-specific HAL for the actuator controller
//!
//! This crate provides RP2040 implementations of the shared `traverse-hal`
//! traits, plus the board pin assignment:
//!
//! - Two-channel PWM slice driving the bridge magnitude lines
//! - GPIO wrappers for the bridge enables, e-stop input and lamps
//! - Board peripheral split

#![no_std]

pub mod board;
pub mod gpio;
pub mod pwm;

// Re-export shared traits from traverse-hal for convenience
pub use traverse_hal::{InputPin, OutputPin, PwmChannel, PwmPair};
