//! PWM slice adapter
//!
//! Wraps an embassy `Pwm` configured for both outputs of one slice. Duty
//! changes rewrite the slice config, as embassy-rp exposes compare values
//! only through `Config`.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use traverse_hal::pwm::duty_to_compare;
use traverse_hal::{PwmChannel, PwmPair};

/// Default counter wrap value
///
/// At the default 125 MHz system clock with no divider this gives a
/// 125 kHz carrier, above the audible range for the motor.
pub const DEFAULT_TOP: u16 = 999;

/// Both channels of one PWM slice
pub struct RpPwmPair {
    pwm: Pwm<'static>,
    config: PwmConfig,
    duty: [u8; 2],
}

impl RpPwmPair {
    /// Take a slice set up with `Pwm::new_output_ab` and force both
    /// channels to zero
    pub fn new(mut pwm: Pwm<'static>, top: u16) -> Self {
        let config = Self::initial_config(top);
        pwm.set_config(&config);

        Self {
            pwm,
            config,
            duty: [0; 2],
        }
    }

    /// Initial config for `Pwm::new_output_ab`, both channels off
    pub fn initial_config(top: u16) -> PwmConfig {
        let mut config = PwmConfig::default();
        config.top = top;
        config.compare_a = 0;
        config.compare_b = 0;
        config
    }
}

impl PwmPair for RpPwmPair {
    fn set_duty(&mut self, channel: PwmChannel, percent: u8) {
        let percent = percent.min(100);
        let compare = duty_to_compare(percent, self.config.top);

        match channel {
            PwmChannel::A => {
                self.config.compare_a = compare;
                self.duty[0] = percent;
            }
            PwmChannel::B => {
                self.config.compare_b = compare;
                self.duty[1] = percent;
            }
        }

        self.pwm.set_config(&self.config);
    }

    fn duty(&self, channel: PwmChannel) -> u8 {
        match channel {
            PwmChannel::A => self.duty[0],
            PwmChannel::B => self.duty[1],
        }
    }
}
