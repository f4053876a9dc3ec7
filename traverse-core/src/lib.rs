//! Board-agnostic core logic for the actuator controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Motor bridge abstraction trait
//! - Position belief and the timed move state machine
//! - Duration table (calibrated travel times)
//! - Emergency stop edge detection
//! - Indicator lamp derivation
//! - Command interpreter and the per-tick control loop
//! - Configuration types and parser

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod indicator;
pub mod interpreter;
pub mod motion;
pub mod safety;
pub mod traits;

pub use traverse_protocol::{Reply, Station, Status};
