//! Replies and unsolicited messages sent to the host
//!
//! Every reply renders as exactly one `\r\n` terminated text line.

use core::fmt::{self, Write};

use heapless::String;

use crate::station::{Station, Status};

/// Longest rendered reply line, terminator included
pub const MAX_REPLY_LEN: usize = 64;

/// A rendered reply line
pub type ReplyLine = String<MAX_REPLY_LEN>;

/// Errors that can occur while rendering a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReplyError {
    /// Rendered text does not fit in `MAX_REPLY_LEN`
    Overflow,
}

/// Messages from the controller to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply<'a> {
    /// Boot banner
    Banner { version: &'a str },
    /// Command summary printed after the banner
    Help,
    /// Echo of a received line
    Received(&'a str),
    /// Move accepted
    MovingTo { station: Station, estimate_ms: u32 },
    /// Move target equals the confirmed position
    AlreadyAt(Station),
    /// Same target re-issued while already moving there
    AlreadyMovingTo(Station),
    /// Move refused because the emergency stop is latched
    EstopRejected,
    /// Move timer progress
    Progress { elapsed_ms: u32, expected_ms: u32 },
    /// Move timer expired
    Reached(Station),
    /// Drive halted by `STOP`
    Stopped,
    /// Status report
    Status(Status),
    /// Emergency stop pressed
    EstopActivated,
    /// Emergency stop released
    EstopReleased,
    /// Unrecognized input, echoed back
    Unknown(&'a str),
    /// Input line exceeded the line buffer
    LineTooLong,
    /// Replies lost because the host link fell behind
    OutputDropped(u32),
}

/// Display helper for millisecond durations as `S.Ts`
struct Seconds(u32);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}s", self.0 / 1000, (self.0 % 1000) / 100)
    }
}

impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Banner { version } => write!(f, "Traverse actuator controller v{} ready", version),
            Reply::Help => f.write_str("Commands: A, B, STOP, STATUS, HOME"),
            Reply::Received(text) => write!(f, "Received: {}", text),
            Reply::MovingTo {
                station,
                estimate_ms,
            } => write!(f, "Moving to {}... (est. {})", station, Seconds(*estimate_ms)),
            Reply::AlreadyAt(station) => write!(f, "Already at {}", station),
            Reply::AlreadyMovingTo(station) => write!(f, "Already moving to {}", station),
            Reply::EstopRejected => f.write_str("E-STOP ACTIVE: move rejected"),
            Reply::Progress {
                elapsed_ms,
                expected_ms,
            } => write!(
                f,
                "Progress: {} / {}",
                Seconds(*elapsed_ms),
                Seconds(*expected_ms)
            ),
            Reply::Reached(station) => write!(f, "Reached {} position", station),
            Reply::Stopped => f.write_str("STOPPED"),
            Reply::Status(status) => write!(f, "STATUS:{}", status),
            Reply::EstopActivated => f.write_str("EMERGENCY STOP ACTIVATED"),
            Reply::EstopReleased => f.write_str("Emergency stop released"),
            Reply::Unknown(text) => write!(f, "Unknown command: {}", text),
            Reply::LineTooLong => f.write_str("Input line too long"),
            Reply::OutputDropped(count) => write!(f, "Output dropped: {} lines", count),
        }
    }
}

impl Reply<'_> {
    /// Render this reply as a terminated line
    pub fn to_line(&self) -> Result<ReplyLine, ReplyError> {
        let mut line = ReplyLine::new();
        write!(line, "{}\r\n", self).map_err(|_| ReplyError::Overflow)?;
        Ok(line)
    }
}
