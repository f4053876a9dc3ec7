//! Configuration types
//!
//! Board-agnostic configuration, fixed at boot.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError};
pub use types::*;
