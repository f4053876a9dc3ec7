//! Indicator lamp bank
//!
//! Three discrete outputs, one per lamp. Levels are written only when they
//! change.

use traverse_core::indicator::IndicatorState;
use traverse_hal::OutputPin;

/// Lamp outputs for "at A", "at B" and "moving"
pub struct IndicatorLeds<P: OutputPin> {
    at_a: P,
    at_b: P,
    moving: P,
    active_low: bool,
    shown: Option<IndicatorState>,
}

impl<P: OutputPin> IndicatorLeds<P> {
    /// Create the bank with every lamp off
    ///
    /// `active_low` inverts the pin level for sinking LED wiring.
    pub fn new(at_a: P, at_b: P, moving: P, active_low: bool) -> Self {
        let mut leds = Self {
            at_a,
            at_b,
            moving,
            active_low,
            shown: None,
        };
        leds.show(IndicatorState::OFF);
        leds
    }

    /// Drive the lamps to `state`
    pub fn show(&mut self, state: IndicatorState) {
        if self.shown == Some(state) {
            return;
        }

        let level = |on: bool| on != self.active_low;
        let (a, b, m) = (level(state.at_a), level(state.at_b), level(state.moving));
        self.at_a.set_state(a);
        self.at_b.set_state(b);
        self.moving.set_state(m);
        self.shown = Some(state);
    }

    /// Lamp state last written
    pub fn shown(&self) -> IndicatorState {
        self.shown.unwrap_or(IndicatorState::OFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn leds(active_low: bool) -> IndicatorLeds<MockPin> {
        IndicatorLeds::new(
            MockPin::default(),
            MockPin::default(),
            MockPin::default(),
            active_low,
        )
    }

    #[test]
    fn test_starts_off() {
        let leds = leds(false);
        assert!(leds.at_a.is_set_low());
        assert!(leds.at_b.is_set_low());
        assert!(leds.moving.is_set_low());
        assert_eq!(leds.shown(), IndicatorState::OFF);
    }

    #[test]
    fn test_show_state() {
        let mut leds = leds(false);
        leds.show(IndicatorState {
            at_a: false,
            at_b: true,
            moving: false,
        });
        assert!(leds.at_a.is_set_low());
        assert!(leds.at_b.is_set_high());
        assert!(leds.moving.is_set_low());
    }

    #[test]
    fn test_active_low_inverts() {
        let mut leds = leds(true);
        assert!(leds.at_a.is_set_high());

        leds.show(IndicatorState::ALL);
        assert!(leds.at_a.is_set_low());
        assert!(leds.at_b.is_set_low());
        assert!(leds.moving.is_set_low());
    }

    #[test]
    fn test_unchanged_state_not_rewritten() {
        let mut leds = leds(false);
        let writes = leds.at_a.writes;
        leds.show(IndicatorState::OFF);
        assert_eq!(leds.at_a.writes, writes);

        leds.show(IndicatorState::ALL);
        assert_eq!(leds.at_a.writes, writes + 1);
    }
}
