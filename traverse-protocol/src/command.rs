//! Host commands
//!
//! Each line is parsed independently. Surrounding whitespace is trimmed and
//! matching ignores ASCII case, so `b`, ` B ` and `B\r` all mean the same.

use crate::station::Station;

/// Commands accepted from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Drive to the given station
    MoveTo(Station),
    /// Halt immediately
    Stop,
    /// Report current status
    Status,
    /// Forget the current position and drive to the home station
    Home,
}

/// Reasons a line does not yield a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line was empty after trimming (link probe)
    Empty,
    /// Line did not match any command
    Unknown,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let token = line.trim();

        if token.is_empty() {
            return Err(CommandError::Empty);
        }

        if let Some(station) = Station::ALL
            .into_iter()
            .find(|s| token.eq_ignore_ascii_case(s.as_str()))
        {
            return Ok(Command::MoveTo(station));
        }

        const KEYWORDS: [(&str, Command); 3] = [
            ("STOP", Command::Stop),
            ("STATUS", Command::Status),
            ("HOME", Command::Home),
        ];

        KEYWORDS
            .into_iter()
            .find(|(keyword, _)| token.eq_ignore_ascii_case(keyword))
            .map(|(_, cmd)| cmd)
            .ok_or(CommandError::Unknown)
    }

    /// Check if this command can change motion state
    pub fn is_motion_command(&self) -> bool {
        !matches!(self, Command::Status)
    }
}
