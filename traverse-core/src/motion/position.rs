//! Believed actuator position

use traverse_protocol::Station;

/// Where the controller believes the actuator is
///
/// Exactly one variant holds at any instant. `Moving` is only held while a
/// move is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// Never confirmed, forced by `HOME`, or left by an interrupted move
    Unknown,
    /// Confirmed at station A (retracted)
    #[default]
    A,
    /// Confirmed at station B (extended)
    B,
    /// Move in flight
    Moving,
}

impl Position {
    /// Confirmed station, if resting at one
    pub fn station(&self) -> Option<Station> {
        match self {
            Position::A => Some(Station::A),
            Position::B => Some(Station::B),
            Position::Unknown | Position::Moving => None,
        }
    }
}

impl From<Station> for Position {
    fn from(station: Station) -> Self {
        match station {
            Station::A => Position::A,
            Station::B => Position::B,
        }
    }
}
