//! Indicator lamp derivation
//!
//! Three lamps: at A, at B, moving. While the emergency stop is latched all
//! three flash together.

use traverse_protocol::{Station, Status};

/// Desired lamp levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorState {
    pub at_a: bool,
    pub at_b: bool,
    pub moving: bool,
}

impl IndicatorState {
    /// All lamps off
    pub const OFF: Self = Self {
        at_a: false,
        at_b: false,
        moving: false,
    };

    /// All lamps on
    pub const ALL: Self = Self {
        at_a: true,
        at_b: true,
        moving: true,
    };

    /// Derive lamp levels from the controller status
    ///
    /// `flash_half_period_ms` of zero shows the e-stop pattern as steady on.
    pub fn derive(status: Status, now_ms: u32, flash_half_period_ms: u32) -> Self {
        match status {
            Status::Estop => {
                if flash_half_period_ms == 0 || (now_ms / flash_half_period_ms) % 2 == 0 {
                    Self::ALL
                } else {
                    Self::OFF
                }
            }
            Status::MovingTo(_) => Self {
                moving: true,
                ..Self::OFF
            },
            Status::At(Station::A) => Self {
                at_a: true,
                ..Self::OFF
            },
            Status::At(Station::B) => Self {
                at_b: true,
                ..Self::OFF
            },
            Status::Unknown => Self::OFF,
        }
    }
}
