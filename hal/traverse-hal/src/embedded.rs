//! Adapters from `embedded-hal` 1.0 digital pins
//!
//! Only pins whose error type is `Infallible` are accepted, which covers
//! on-chip GPIO for the embassy HALs. The output adapter remembers the last
//! written level so `is_set_high` can stay `&self`.

use core::convert::Infallible;

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin};

/// Output pin adapter
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin<Error = Infallible>> EhOutput<P> {
    /// Wrap a pin and drive it to `initial_high`
    pub fn new(pin: P, initial_high: bool) -> Self {
        let mut out = Self { pin, high: initial_high };
        out.set_state(initial_high);
        out
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin<Error = Infallible>> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin adapter
pub struct EhInput<P> {
    pin: P,
}

impl<P: digital::InputPin<Error = Infallible>> EhInput<P> {
    /// Wrap a pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: digital::InputPin<Error = Infallible>> InputPin for EhInput<P> {
    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePin {
        level: bool,
        writes: u32,
    }

    impl digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl digital::OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.level = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.level = true;
            self.writes += 1;
            Ok(())
        }
    }

    impl digital::InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.level)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.level)
        }
    }

    #[test]
    fn test_output_drives_initial_level() {
        let out = EhOutput::new(FakePin { level: true, writes: 0 }, false);
        assert!(out.is_set_low());
        let pin = out.into_inner();
        assert!(!pin.level);
        assert_eq!(pin.writes, 1);
    }

    #[test]
    fn test_output_tracks_level() {
        let mut out = EhOutput::new(FakePin { level: false, writes: 0 }, false);
        out.set_high();
        assert!(out.is_set_high());
        out.set_state(false);
        assert!(out.is_set_low());
        assert_eq!(out.into_inner().writes, 3);
    }

    #[test]
    fn test_input_reads_level() {
        let mut input = EhInput::new(FakePin { level: false, writes: 0 });
        assert!(input.is_low());
        input.pin.level = true;
        assert!(input.is_high());
    }
}
