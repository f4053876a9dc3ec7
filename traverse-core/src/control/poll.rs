//! Cooperative control loop
//!
//! One iteration samples the emergency stop, advances the move timer and
//! then handles at most one input line. The e-stop is therefore always
//! seen before any command in the same iteration. Lamp levels are derived
//! from the state the iteration leaves behind.
//!
//! Overlong lines arrive in the same queue as complete ones, so their
//! rejection is answered in input order.

use traverse_protocol::{Command, LineError, Reply};

use crate::config::ActuatorConfig;
use crate::indicator::IndicatorState;
use crate::interpreter::{emit_event, CommandInterpreter};
use crate::motion::MotionController;
use crate::traits::BridgeDriver;

/// Polling controller
pub struct ControlLoop<D: BridgeDriver> {
    motion: MotionController<D>,
    interpreter: CommandInterpreter,
    flash_half_period_ms: u32,
}

impl<D: BridgeDriver> ControlLoop<D> {
    /// Create the loop; the bridge is released
    pub fn new(driver: D, config: &ActuatorConfig) -> Self {
        Self {
            motion: MotionController::new(driver, config),
            interpreter: CommandInterpreter,
            flash_half_period_ms: config.indicator.flash_half_period_ms,
        }
    }

    /// Emit the boot greeting: banner, command summary, initial status
    pub fn boot(&self, version: &str, emit: &mut impl FnMut(Reply<'_>)) {
        emit(Reply::Banner { version });
        emit(Reply::Help);
        emit(Reply::Status(self.motion.status()));
    }

    /// Run one iteration
    ///
    /// `estop_input_high` is the raw level of the e-stop input. `line` is
    /// the next queued input line, if one is waiting, or the error for a
    /// line the receiver had to discard. Returns the lamp levels to show
    /// until the next iteration and the command executed.
    pub fn iterate(
        &mut self,
        now_ms: u32,
        estop_input_high: bool,
        line: Option<Result<&str, LineError>>,
        emit: &mut impl FnMut(Reply<'_>),
    ) -> (IndicatorState, Option<Command>) {
        if let Some(event) = self.motion.check_emergency_stop(estop_input_high) {
            emit_event(&self.motion, event, emit);
        }

        if let Some(event) = self.motion.tick(now_ms) {
            emit_event(&self.motion, event, emit);
        }

        let command = match line {
            Some(Ok(line)) => self.interpreter.execute(&mut self.motion, line, now_ms, emit),
            Some(Err(LineError::Overflow)) => {
                emit(Reply::LineTooLong);
                None
            }
            None => None,
        };

        let lamps =
            IndicatorState::derive(self.motion.status(), now_ms, self.flash_half_period_ms);

        (lamps, command)
    }

    /// Motion controller
    pub fn motion(&self) -> &MotionController<D> {
        &self.motion
    }
}
