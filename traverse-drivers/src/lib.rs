//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in traverse-core, written against the traverse-hal pin traits:
//!
//! - H-bridge motor driver (two enables, two PWM lines)
//! - Indicator lamp bank

#![no_std]
#![deny(unsafe_code)]

pub mod bridge;
pub mod indicator;

pub use bridge::HBridge;
pub use indicator::IndicatorLeds;
