//! Control loop
//!
//! One owned object advanced once per poll iteration.

pub mod backlog;
pub mod poll;

pub use backlog::{Admission, ReplyBacklog};
pub use poll::ControlLoop;
