//! Timed open-loop motion
//!
//! Position is a belief inferred from the last commanded target and the
//! elapsed time, never a measurement.

pub mod controller;
pub mod duration;
pub mod events;
pub mod position;

pub use controller::{Move, MotionController};
pub use duration::DurationTable;
pub use events::MotionEvent;
pub use position::Position;
