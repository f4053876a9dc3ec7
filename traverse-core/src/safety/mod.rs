//! Safety monitoring
//!
//! Emergency stop input handling.

pub mod estop;

pub use estop::{EstopEdge, EstopMonitor};
