//! Dual-PWM H-bridge driver
//!
//! Drives a half-bridge pair such as the BTS7960: two enable lines that must
//! both be high for any output, and one PWM magnitude line per direction.
//!
//! Switching order matters. When energizing, the opposite PWM channel is
//! zeroed before the enables are raised, so both half-bridges are never
//! driven at once. When releasing, PWM drops first and the enables last.
//!
//! ```ignore
//! let mut bridge = HBridge::new(enable_a, enable_b, pwm);
//! bridge.drive(DriveDirection::TowardB, 100);
//! // ...
//! bridge.release();
//! ```

use traverse_core::traits::{BridgeDriver, BridgeOutputs, DriveDirection};
use traverse_hal::{OutputPin, PwmChannel, PwmPair};

/// PWM channel wired to the "toward A" input
const TOWARD_A: PwmChannel = PwmChannel::A;
/// PWM channel wired to the "toward B" input
const TOWARD_B: PwmChannel = PwmChannel::B;

/// H-bridge with two enables and a two-channel PWM slice
pub struct HBridge<E: OutputPin, P: PwmPair> {
    enable_a: E,
    enable_b: E,
    pwm: P,
}

impl<E: OutputPin, P: PwmPair> HBridge<E, P> {
    /// Create a driver and force all outputs off
    pub fn new(enable_a: E, enable_b: E, pwm: P) -> Self {
        let mut bridge = Self {
            enable_a,
            enable_b,
            pwm,
        };
        bridge.release();
        bridge
    }

    fn channels(direction: DriveDirection) -> (PwmChannel, PwmChannel) {
        match direction {
            DriveDirection::TowardA => (TOWARD_A, TOWARD_B),
            DriveDirection::TowardB => (TOWARD_B, TOWARD_A),
        }
    }
}

impl<E: OutputPin, P: PwmPair> BridgeDriver for HBridge<E, P> {
    fn drive(&mut self, direction: DriveDirection, duty_percent: u8) {
        let (active, idle) = Self::channels(direction);

        self.pwm.set_duty(idle, 0);
        self.enable_a.set_high();
        self.enable_b.set_high();
        self.pwm.set_duty(active, duty_percent.min(100));
    }

    fn release(&mut self) {
        self.pwm.set_both_off();
        self.enable_a.set_low();
        self.enable_b.set_low();
    }

    fn outputs(&self) -> BridgeOutputs {
        BridgeOutputs {
            enable: [self.enable_a.is_set_high(), self.enable_b.is_set_high()],
            pwm_toward_a: self.pwm.duty(TOWARD_A),
            pwm_toward_b: self.pwm.duty(TOWARD_B),
        }
    }
}
