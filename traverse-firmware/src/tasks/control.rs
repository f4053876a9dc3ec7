//! Control task
//!
//! Owns the control loop and every piece of actuator hardware. Runs the
//! poll loop on a fixed 10 ms ticker: e-stop, move timer, at most one
//! command line, then the indicator lamps.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use traverse_core::config::ActuatorConfig;
use traverse_core::control::{Admission, ControlLoop, ReplyBacklog};
use traverse_core::Reply;
use traverse_drivers::{HBridge, IndicatorLeds};
use traverse_hal_rp2040::gpio::{RpInput, RpOutput};
use traverse_hal_rp2040::pwm::RpPwmPair;
use traverse_hal_rp2040::InputPin;

use crate::channels::{LINE_CHANNEL, REPLY_CHANNEL};

/// Poll period
pub const TICK_INTERVAL_MS: u64 = 10;

/// Firmware version reported in the boot banner
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Motor bridge on the RP2040 board
pub type Bridge = HBridge<RpOutput, RpPwmPair>;

/// Hardware handed to the control task
pub struct ControlHardware {
    pub bridge: Bridge,
    pub estop: RpInput,
    pub lamps: IndicatorLeds<RpOutput>,
}

/// Render a reply and queue it for the TX task
fn queue(reply: Reply<'_>) {
    match reply.to_line() {
        Ok(line) => {
            if REPLY_CHANNEL.try_send(line).is_err() {
                warn!("Reply queue full");
            }
        }
        Err(e) => warn!("Failed to render reply: {:?}", e),
    }
}

/// Queue a reply without blocking the poll loop
///
/// When the host link falls behind, replies are dropped and the host is
/// told how many once the queue has room again.
fn emit(backlog: &mut ReplyBacklog, reply: Reply<'_>) {
    match backlog.admit(REPLY_CHANNEL.free_capacity()) {
        Admission::Send => queue(reply),
        Admission::NoticeThenSend(count) => {
            warn!("{} reply lines dropped (host link too slow)", count);
            queue(Reply::OutputDropped(count));
            queue(reply);
        }
        Admission::Drop => {}
    }
}

/// Control task - runs the poll loop
#[embassy_executor::task]
pub async fn control_task(hw: ControlHardware, config: ActuatorConfig) {
    info!("Control task started");

    let ControlHardware {
        bridge,
        mut estop,
        mut lamps,
    } = hw;

    let mut backlog = ReplyBacklog::new();
    let mut ctl = ControlLoop::new(bridge, &config);
    ctl.boot(VERSION, &mut |reply| emit(&mut backlog, reply));
    info!("Boot status: {:?}", ctl.motion().status());

    let mut last_status = ctl.motion().status();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        // Truncation is intended: the controller works on wrapping ms
        let now_ms = Instant::now().as_millis() as u32;
        let estop_high = estop.is_high();
        let input = LINE_CHANNEL.try_receive().ok();
        let line = input.as_ref().map(|input| input.as_deref().map_err(|e| *e));

        let (lamp_state, command) =
            ctl.iterate(now_ms, estop_high, line, &mut |reply| emit(&mut backlog, reply));

        match command {
            Some(command) if command.is_motion_command() => {
                info!("Executed {:?} -> {:?}", command, ctl.motion().status());
            }
            Some(command) => debug!("Executed {:?}", command),
            None => {}
        }

        let status = ctl.motion().status();
        if status != last_status {
            info!("Status {:?} -> {:?}", last_status, status);
            last_status = status;
        }

        lamps.show(lamp_state);

        ticker.next().await;
    }
}
