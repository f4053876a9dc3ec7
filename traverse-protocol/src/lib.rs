//! Serial Command Protocol
//!
//! This crate defines the text protocol spoken between the host (any serial
//! terminal or monitoring process) and the actuator controller.
//!
//! # Protocol Overview
//!
//! One command per line, newline terminated, case-insensitive:
//! ```text
//! host  -> ctrl   B\n
//! ctrl  -> host   Received: B\r\n
//! ctrl  -> host   Moving to B... (est. 14.0s)\r\n
//! ctrl  -> host   Progress: 5.0s / 14.0s\r\n
//! ctrl  -> host   Reached B position\r\n
//! ctrl  -> host   STATUS:B\r\n
//! ```
//!
//! Replies are plain text lines; there is no binary framing.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod reply;
pub mod station;

pub use command::{Command, CommandError};
pub use line::{LineBuffer, LineError, MAX_LINE_LEN};
pub use reply::{Reply, ReplyError, ReplyLine, MAX_REPLY_LEN};
pub use station::{Station, Status};

/// Serial baud rate expected by host tooling
pub const BAUD_RATE: u32 = 9600;
