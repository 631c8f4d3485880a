//! Control pot sampling task
//!
//! Reads the flow pot, smooths it and publishes the ramp ceiling.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use fireball_core::input::scale_pot;
use fireball_drivers::PotFilter;

use crate::channels::{POT_MAX, POT_MIN, TARGET_MAX_DUTY};

/// Sample interval in milliseconds
const POT_INTERVAL_MS: u64 = 20;

/// Samples in the moving average
const POT_SAMPLES: usize = 4;

/// Pot task - keeps `TARGET_MAX_DUTY` current
#[embassy_executor::task]
pub async fn pot_task(mut adc: Adc<'static, Async>, mut channel: Channel<'static>) {
    info!("Pot task started");

    let mut filter = PotFilter::<POT_SAMPLES>::new();
    let mut ticker = Ticker::every(Duration::from_millis(POT_INTERVAL_MS));

    loop {
        ticker.next().await;

        match adc.read(&mut channel).await {
            Ok(raw) => filter.push_raw12(raw),
            Err(e) => {
                warn!("Pot read failed: {:?}", e);
                continue;
            }
        }

        if let Some(value) = filter.value() {
            let duty = scale_pot(
                value,
                POT_MIN.load(Ordering::Relaxed),
                POT_MAX.load(Ordering::Relaxed),
            );
            TARGET_MAX_DUTY.store(duty, Ordering::Relaxed);
        }
    }
}
