//! PWM abstractions
//!
//! The motor bridge takes two PWM magnitude lines, one per direction. On
//! most parts these map onto the A and B outputs of a single PWM slice.

/// One output of a PWM slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    A,
    B,
}

/// Two-channel PWM output
pub trait PwmPair {
    /// Set the duty cycle of one channel (0-100%, clamped)
    fn set_duty(&mut self, channel: PwmChannel, percent: u8);

    /// Duty cycle last written to a channel
    fn duty(&self, channel: PwmChannel) -> u8;

    /// Drive both channels to zero
    fn set_both_off(&mut self) {
        self.set_duty(PwmChannel::A, 0);
        self.set_duty(PwmChannel::B, 0);
    }
}

/// Convert a duty percentage into a compare value for a counter wrapping
/// at `top`
///
/// 100% yields `top + 1` so the output stays high for the whole period.
pub fn duty_to_compare(percent: u8, top: u16) -> u16 {
    let percent = u32::from(percent.min(100));
    let period = u32::from(top) + 1;
    (period * percent / 100).min(u32::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duty_to_compare() {
        assert_eq!(duty_to_compare(0, 999), 0);
        assert_eq!(duty_to_compare(50, 999), 500);
        assert_eq!(duty_to_compare(100, 999), 1000);
    }

    #[test]
    fn test_duty_clamped() {
        assert_eq!(duty_to_compare(250, 999), 1000);
    }

    #[test]
    fn test_full_range_top() {
        assert_eq!(duty_to_compare(100, u16::MAX), u16::MAX);
    }
}
