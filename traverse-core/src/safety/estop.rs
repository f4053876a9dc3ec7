//! Emergency stop edge detection
//!
//! The input is sampled once per tick. Only transitions produce an edge, so
//! holding the button does not repeat the activation.

/// Emergency stop transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EstopEdge {
    /// Inactive -> active
    Pressed,
    /// Active -> inactive
    Released,
}

/// Emergency stop monitor
#[derive(Debug, Clone)]
pub struct EstopMonitor {
    /// Input reads low when pressed
    active_low: bool,
    /// Latched state from the last sample
    active: bool,
}

impl EstopMonitor {
    /// Create a monitor in the released state
    pub const fn new(active_low: bool) -> Self {
        Self {
            active_low,
            active: false,
        }
    }

    /// Sample the raw input level
    ///
    /// Returns the edge if the state changed since the last sample.
    pub fn update(&mut self, input_high: bool) -> Option<EstopEdge> {
        let pressed = input_high != self.active_low;

        match (self.active, pressed) {
            (false, true) => {
                self.active = true;
                Some(EstopEdge::Pressed)
            }
            (true, false) => {
                self.active = false;
                Some(EstopEdge::Released)
            }
            _ => None,
        }
    }

    /// Check if the emergency stop is latched
    pub fn is_active(&self) -> bool {
        self.active
    }
}
