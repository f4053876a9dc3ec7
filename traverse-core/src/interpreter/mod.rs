//! Command interpreter
//!
//! Maps parsed host lines onto motion operations and renders replies.

pub mod dispatch;

pub use dispatch::{emit_event, CommandInterpreter};
