//! Motor bridge drivers

pub mod hbridge;

pub use hbridge::HBridge;
