//! Traverse Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the actuator drivers
//! are written against, so the same driver code runs on the RP2040 board and
//! against mock pins in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  traverse-drivers (H-bridge, lamps)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  traverse-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ traverse-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pwm::PwmPair`] - Two-channel PWM slice
//!
//! [`embedded`] adapts any `embedded-hal` 1.0 digital pin with an
//! infallible error type to the GPIO traits.

#![no_std]
#![deny(unsafe_code)]

pub mod embedded;
pub mod gpio;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use embedded::{EhInput, EhOutput};
pub use gpio::{InputPin, OutputPin};
pub use pwm::{PwmChannel, PwmPair};
