//! Traverse - Linear Actuator Controller Firmware
//!
//! Main firmware binary for an RP2040 board driving a linear actuator
//! through a dual-PWM H-bridge. The host sends `A`, `B`, `STOP`, `STATUS`
//! and `HOME` over the serial link; position is inferred from calibrated
//! travel times.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::Pwm;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use traverse_drivers::{HBridge, IndicatorLeds};
use traverse_hal_rp2040::board::BoardPeripherals;
use traverse_hal_rp2040::gpio::{estop_input, output_low};
use traverse_hal_rp2040::pwm::{RpPwmPair, DEFAULT_TOP};
use traverse_protocol::BAUD_RATE;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Traverse firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = BoardPeripherals::from_peripherals(p);
    info!("Peripherals initialized");

    let config = config::load();

    // Bridge first, so the motor is held off before anything else runs
    let pwm = Pwm::new_output_ab(
        board.bridge.slice,
        board.bridge.pwm_toward_a,
        board.bridge.pwm_toward_b,
        RpPwmPair::initial_config(DEFAULT_TOP),
    );
    let bridge = HBridge::new(
        output_low(board.bridge.enable_a),
        output_low(board.bridge.enable_b),
        RpPwmPair::new(pwm, DEFAULT_TOP),
    );
    info!("H-bridge initialized (released)");

    let estop = estop_input(board.estop, config.estop.active_low);
    let lamps = IndicatorLeds::new(
        output_low(board.lamps.at_a),
        output_low(board.lamps.at_b),
        output_low(board.lamps.moving),
        false,
    );

    // Host serial link
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(
        board.serial.uart,
        board.serial.tx,
        board.serial.rx,
        uart_config,
    );
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", BAUD_RATE);

    let hw = tasks::ControlHardware {
        bridge,
        estop,
        lamps,
    };

    // Spawn tasks
    spawner.spawn(tasks::serial_tx_task(tx)).unwrap();
    spawner.spawn(tasks::serial_rx_task(rx)).unwrap();
    spawner.spawn(tasks::control_task(hw, config)).unwrap();

    info!("All tasks spawned, firmware running");
}
