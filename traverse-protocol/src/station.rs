//! Station and status vocabulary shared by host and controller

use core::fmt;

/// One of the two end positions of the actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Station {
    /// Retracted end
    A,
    /// Extended end
    B,
}

impl Station {
    /// All stations, in protocol order
    pub const ALL: [Station; 2] = [Station::A, Station::B];

    /// Protocol name of this station
    pub fn as_str(&self) -> &'static str {
        match self {
            Station::A => "A",
            Station::B => "B",
        }
    }

    /// The station at the other end of travel
    pub fn opposite(&self) -> Station {
        match self {
            Station::A => Station::B,
            Station::B => Station::A,
        }
    }

    /// Parse an already upper-cased station token
    pub fn from_token(token: &str) -> Option<Station> {
        match token {
            "A" => Some(Station::A),
            "B" => Some(Station::B),
            _ => None,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controller status as reported by `STATUS`
///
/// Renders as the text after the `STATUS:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// Emergency stop latched
    Estop,
    /// Move in flight toward a station
    MovingTo(Station),
    /// Resting at a confirmed station
    At(Station),
    /// Resting somewhere unknown
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Estop => f.write_str("ESTOP"),
            Status::MovingTo(station) => write!(f, "MOVING_TO_{}", station),
            Status::At(station) => f.write_str(station.as_str()),
            Status::Unknown => f.write_str("UNKNOWN"),
        }
    }
}
