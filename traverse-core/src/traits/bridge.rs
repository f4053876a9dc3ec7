//! H-bridge motor driver trait
//!
//! The actuator motor is driven through a bidirectional bridge with two
//! enable lines and two PWM magnitude channels, one per direction:
//!
//! | State          | enable[0] | enable[1] | pwm toward A | pwm toward B |
//! |----------------|-----------|-----------|--------------|--------------|
//! | Released       | low       | low       | 0            | 0            |
//! | Driving to A   | high      | high      | duty         | 0            |
//! | Driving to B   | high      | high      | 0            | duty         |
//!
//! Both enable lines must be high for the bridge to pass any current.

use traverse_protocol::Station;

/// Direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveDirection {
    /// Retract toward station A
    TowardA,
    /// Extend toward station B
    TowardB,
}

impl From<Station> for DriveDirection {
    fn from(station: Station) -> Self {
        match station {
            Station::A => DriveDirection::TowardA,
            Station::B => DriveDirection::TowardB,
        }
    }
}

/// Snapshot of the bridge output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BridgeOutputs {
    /// Enable line levels (both must be high to drive)
    pub enable: [bool; 2],
    /// Duty cycle percentage on the channel that drives toward A
    pub pwm_toward_a: u8,
    /// Duty cycle percentage on the channel that drives toward B
    pub pwm_toward_b: u8,
}

impl BridgeOutputs {
    /// All lines deasserted
    pub const RELEASED: Self = Self {
        enable: [false, false],
        pwm_toward_a: 0,
        pwm_toward_b: 0,
    };

    /// Check that both PWM channels are zero and both enables are low
    pub fn is_released(&self) -> bool {
        *self == Self::RELEASED
    }

    /// Direction currently being driven, if exactly one channel is active
    /// and the bridge is enabled
    pub fn direction(&self) -> Option<DriveDirection> {
        if !(self.enable[0] && self.enable[1]) {
            return None;
        }
        match (self.pwm_toward_a, self.pwm_toward_b) {
            (a, 0) if a > 0 => Some(DriveDirection::TowardA),
            (0, b) if b > 0 => Some(DriveDirection::TowardB),
            _ => None,
        }
    }
}

/// Bidirectional motor bridge
pub trait BridgeDriver {
    /// Energize the bridge in one direction at a fixed duty cycle
    ///
    /// The opposite channel must be at zero before the active channel is
    /// raised so the bridge never sees both directions at once.
    fn drive(&mut self, direction: DriveDirection, duty_percent: u8);

    /// De-energize: both PWM channels to zero, then both enables low
    fn release(&mut self);

    /// Current output line levels
    fn outputs(&self) -> BridgeOutputs;

    /// Check if the bridge is fully de-energized
    fn is_released(&self) -> bool {
        self.outputs().is_released()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_released_outputs() {
        assert!(BridgeOutputs::RELEASED.is_released());
        assert!(BridgeOutputs::default().is_released());
        assert_eq!(BridgeOutputs::RELEASED.direction(), None);
    }

    #[test]
    fn test_direction_requires_both_enables() {
        let outputs = BridgeOutputs {
            enable: [true, false],
            pwm_toward_a: 0,
            pwm_toward_b: 80,
        };
        assert_eq!(outputs.direction(), None);
        assert!(!outputs.is_released());

        let outputs = BridgeOutputs {
            enable: [true, true],
            ..outputs
        };
        assert_eq!(outputs.direction(), Some(DriveDirection::TowardB));
    }

    #[test]
    fn test_both_channels_is_not_a_direction() {
        let outputs = BridgeOutputs {
            enable: [true, true],
            pwm_toward_a: 50,
            pwm_toward_b: 50,
        };
        assert_eq!(outputs.direction(), None);
    }

    #[test]
    fn test_station_to_direction() {
        assert_eq!(DriveDirection::from(Station::A), DriveDirection::TowardA);
        assert_eq!(DriveDirection::from(Station::B), DriveDirection::TowardB);
    }
}
