//! GPIO wrappers
//!
//! Embassy pins implement the `embedded-hal` 1.0 digital traits with an
//! infallible error, so the generic adapters from `traverse-hal` apply.

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use traverse_hal::{EhInput, EhOutput};

/// Push-pull output
pub type RpOutput = EhOutput<Output<'static>>;

/// Digital input
pub type RpInput = EhInput<Input<'static>>;

/// Configure a pin as an output, initially low
pub fn output_low(pin: Peri<'static, impl Pin>) -> RpOutput {
    EhOutput::new(Output::new(pin, Level::Low), false)
}

/// Configure the emergency stop input
///
/// The pull-up makes an unwired or released active-low button read high.
pub fn estop_input(pin: Peri<'static, impl Pin>, active_low: bool) -> RpInput {
    let pull = if active_low { Pull::Up } else { Pull::Down };
    EhInput::new(Input::new(pin, pull))
}
