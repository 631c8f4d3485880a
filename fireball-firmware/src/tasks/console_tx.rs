//! Console UART transmit task
//!
//! Renders reports from the other tasks and writes them out.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;
use heapless::String;

use crate::channels::REPORTS;

/// Longest rendered report (the settings listing)
const LINE_SIZE: usize = 256;

/// Console TX task - writes report lines to the UART
#[embassy_executor::task]
pub async fn console_tx_task(mut tx: BufferedUartTx) {
    info!("Console TX task started");

    loop {
        let report = REPORTS.receive().await;

        let mut text: String<LINE_SIZE> = String::new();
        if report.write_to(&mut text).is_err() {
            warn!("Report truncated");
        }

        if let Err(e) = tx.write_all(text.as_bytes()).await {
            warn!("Failed to send report: {:?}", e);
        }
    }
}
