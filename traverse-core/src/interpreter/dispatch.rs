//! Line dispatch
//!
//! Stateless: every line is parsed and executed on its own. Lines that
//! arrive mid-move are executed immediately; there is no queue.

use traverse_protocol::{Command, CommandError, Reply};

use crate::motion::{MotionController, MotionEvent};
use crate::traits::BridgeDriver;

/// Emit the reply for a motion event, followed by a status report when the
/// event changed the reported state
pub fn emit_event<D: BridgeDriver>(
    motion: &MotionController<D>,
    event: MotionEvent,
    emit: &mut impl FnMut(Reply<'_>),
) {
    emit(event.reply());
    if event.reports_status() {
        emit(Reply::Status(motion.status()));
    }
}

/// Host command interpreter
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandInterpreter;

impl CommandInterpreter {
    /// Parse and execute one input line
    ///
    /// Empty lines are ignored without a reply. Every other line is
    /// acknowledged with `Received:` before its outcome. Returns the parsed
    /// command, if any.
    pub fn execute<D: BridgeDriver>(
        &self,
        motion: &mut MotionController<D>,
        line: &str,
        now_ms: u32,
        emit: &mut impl FnMut(Reply<'_>),
    ) -> Option<Command> {
        let text = line.trim();

        let command = match Command::parse(text) {
            Ok(command) => command,
            Err(CommandError::Empty) => return None,
            Err(CommandError::Unknown) => {
                emit(Reply::Received(text));
                emit(Reply::Unknown(text));
                return None;
            }
        };

        emit(Reply::Received(text));

        match command {
            Command::MoveTo(station) => {
                let event = motion.request_move(station, now_ms);
                emit_event(motion, event, emit);
            }
            Command::Home => {
                let event = motion.home(now_ms);
                emit_event(motion, event, emit);
            }
            Command::Stop => {
                let event = motion.stop();
                emit_event(motion, event, emit);
            }
            Command::Status => emit(Reply::Status(motion.status())),
        }

        Some(command)
    }
}
