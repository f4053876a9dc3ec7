//! Hardware abstraction traits
//!
//! These traits define the interface between the motion logic
//! and hardware-specific implementations.

pub mod bridge;

pub use bridge::{BridgeDriver, BridgeOutputs, DriveDirection};
