//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use heapless::String;

use traverse_protocol::{LineError, ReplyLine, MAX_LINE_LEN};

/// A complete input line, or the error for one the receiver discarded
pub type InputLine = Result<String<MAX_LINE_LEN>, LineError>;

/// Channel capacity for complete command lines
const LINE_CHANNEL_SIZE: usize = 4;

/// Channel capacity for rendered reply lines
///
/// A single iteration can emit up to five lines (e-stop event, status,
/// received, outcome, status), so this leaves room for a few iterations of
/// backlog.
const REPLY_CHANNEL_SIZE: usize = 16;

/// Input lines from the host, newline stripped, in arrival order
pub static LINE_CHANNEL: Channel<CriticalSectionRawMutex, InputLine, LINE_CHANNEL_SIZE> =
    Channel::new();

/// Reply lines to the host, CRLF terminated
///
/// Only the control task sends here, so its free capacity can only grow
/// between a check and the following sends.
pub static REPLY_CHANNEL: Channel<CriticalSectionRawMutex, ReplyLine, REPLY_CHANNEL_SIZE> =
    Channel::new();
