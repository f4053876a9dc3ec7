//! Indicator drivers

pub mod leds;

pub use leds::IndicatorLeds;
