//! Indicator lamps
//!
//! Purely derived from controller status; never fed back into control.

pub mod lamps;

pub use lamps::IndicatorState;
