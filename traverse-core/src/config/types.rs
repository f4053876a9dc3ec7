//! Configuration type definitions
//!
//! All values are fixed at boot. Durations are in milliseconds.

use traverse_protocol::Station;

use crate::motion::Position;

/// Default full-stroke travel time (ms)
pub const DEFAULT_STROKE_MS: u32 = 12_000;

/// Default safety buffer added to every leg (ms)
pub const DEFAULT_BUFFER_MS: u32 = 2_000;

/// Default minimum spacing of progress reports (ms)
pub const DEFAULT_PROGRESS_INTERVAL_MS: u32 = 5_000;

/// Default indicator flash half-period while the e-stop is latched (ms)
pub const DEFAULT_FLASH_HALF_PERIOD_MS: u32 = 250;

/// Timing model and position bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConfig {
    /// Calibrated A -> B travel time
    pub a_to_b_ms: u32,
    /// Calibrated B -> A travel time
    pub b_to_a_ms: u32,
    /// Safety buffer added to every expected duration
    pub buffer_ms: u32,
    /// Minimum spacing of progress reports (0 disables them)
    pub progress_interval_ms: u32,
    /// Believed position at boot
    pub default_position: Position,
    /// Station targeted by `HOME`
    pub home: Station,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            a_to_b_ms: DEFAULT_STROKE_MS,
            b_to_a_ms: DEFAULT_STROKE_MS,
            buffer_ms: DEFAULT_BUFFER_MS,
            progress_interval_ms: DEFAULT_PROGRESS_INTERVAL_MS,
            default_position: Position::A,
            home: Station::A,
        }
    }
}

/// Bridge drive settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveConfig {
    /// Fixed PWM duty cycle during a move (1-100)
    pub duty_percent: u8,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self { duty_percent: 100 }
    }
}

/// Emergency stop input settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EstopConfig {
    /// Input reads low when pressed (pull-up wiring)
    pub active_low: bool,
}

impl Default for EstopConfig {
    fn default() -> Self {
        Self { active_low: true }
    }
}

/// Indicator lamp settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    /// On/off half-period of the e-stop flash pattern (0 = steady on)
    pub flash_half_period_ms: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            flash_half_period_ms: DEFAULT_FLASH_HALF_PERIOD_MS,
        }
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorConfig {
    pub motion: MotionConfig,
    pub drive: DriveConfig,
    pub estop: EstopConfig,
    pub indicator: IndicatorConfig,
}
