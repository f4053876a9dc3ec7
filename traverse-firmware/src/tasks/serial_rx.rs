//! Host UART receive task
//!
//! Assembles newline-terminated command lines and forwards them to the
//! control task. Overlong lines are forwarded as errors in the same queue so
//! the control task answers them in order.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use traverse_protocol::{LineBuffer, LineError};

use crate::channels::LINE_CHANNEL;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Serial RX task - receives bytes from the host and splits them into lines
#[embassy_executor::task]
pub async fn serial_rx_task(mut rx: BufferedUartRx) {
    info!("Serial RX task started");

    let mut lines = LineBuffer::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match lines.feed(byte) {
                        Ok(Some(line)) => {
                            debug!("Line: {}", line.as_str());
                            // Backpressure: wait for the control task rather than drop
                            LINE_CHANNEL.send(Ok(line)).await;
                        }
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(LineError::Overflow) => {
                            warn!("Input line too long, discarding");
                            LINE_CHANNEL.send(Err(LineError::Overflow)).await;
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
                lines.reset();
            }
        }
    }
}
