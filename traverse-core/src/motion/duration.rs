//! Calibrated travel durations
//!
//! The expected duration of a move is the sole completion signal, so every
//! entry must be conservative: measured travel time plus a safety buffer.

use traverse_protocol::Station;

use super::position::Position;
use crate::config::MotionConfig;

/// Static (origin, target) -> travel time map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DurationTable {
    /// Full stroke A -> B (ms)
    a_to_b_ms: u32,
    /// Full stroke B -> A (ms)
    b_to_a_ms: u32,
    /// Safety buffer added to every leg (ms)
    buffer_ms: u32,
}

impl DurationTable {
    /// Create a table from calibrated leg times
    pub const fn new(a_to_b_ms: u32, b_to_a_ms: u32, buffer_ms: u32) -> Self {
        Self {
            a_to_b_ms,
            b_to_a_ms,
            buffer_ms,
        }
    }

    /// Build the table from motion configuration
    pub fn from_config(config: &MotionConfig) -> Self {
        Self::new(config.a_to_b_ms, config.b_to_a_ms, config.buffer_ms)
    }

    /// Raw leg time between two stations, without buffer
    pub fn leg_ms(&self, from: Station, to: Station) -> u32 {
        match (from, to) {
            (Station::A, Station::B) => self.a_to_b_ms,
            (Station::B, Station::A) => self.b_to_a_ms,
            _ => 0,
        }
    }

    /// Longest single leg plus buffer
    ///
    /// Used whenever the origin is not known, since the direction of the
    /// remaining travel is unknown too.
    pub fn worst_case_ms(&self) -> u32 {
        self.a_to_b_ms
            .max(self.b_to_a_ms)
            .saturating_add(self.buffer_ms)
    }

    /// Expected duration of a move from `origin` to `target`
    pub fn expected_ms(&self, origin: Position, target: Station) -> u32 {
        match origin.station() {
            Some(from) => self.leg_ms(from, target).saturating_add(self.buffer_ms),
            None => self.worst_case_ms(),
        }
    }
}
