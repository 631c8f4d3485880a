//! Console UART receive task
//!
//! Collects bytes into lines and forwards parsed commands to the control
//! task. CR, LF or both end a line; backspace and DEL erase.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;
use heapless::Vec;

use fireball_core::console::parse_line;

use crate::channels::{report, CONTROL_CMD};
use crate::report::Report;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Longest accepted console line
const LINE_SIZE: usize = 64;

/// Console RX task - reads and parses command lines
#[embassy_executor::task]
pub async fn console_rx_task(mut rx: BufferedUartRx) {
    info!("Console RX task started");

    let mut line: Vec<u8, LINE_SIZE> = Vec::new();
    let mut overflowed = false;
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        let n = match rx.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART read error: {:?}", e);
                continue;
            }
        };

        for &byte in &buf[..n] {
            match byte {
                b'\r' | b'\n' => {
                    if overflowed {
                        report(Report::Rejected("line too long"));
                    } else if !line.is_empty() {
                        handle_line(&line).await;
                    }
                    line.clear();
                    overflowed = false;
                }
                0x08 | 0x7F => {
                    line.pop();
                }
                _ => {
                    if line.push(byte).is_err() {
                        overflowed = true;
                    }
                }
            }
        }
    }
}

/// Parse one line and forward the command
async fn handle_line(line: &[u8]) {
    let Ok(text) = core::str::from_utf8(line) else {
        report(Report::Rejected("invalid characters"));
        return;
    };

    match parse_line(text) {
        Ok(command) => CONTROL_CMD.send(command).await,
        Err(e) => {
            debug!("Console parse error: {:?}", e);
            report(Report::Rejected(e.message()));
        }
    }
}
