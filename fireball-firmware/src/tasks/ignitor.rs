//! Spark ignitor task
//!
//! The burst controller only requests sparks through [`SignalIgnitor`];
//! this task owns the spark output and times each spark.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::Timer;
use portable_atomic::Ordering;

use fireball_core::time::Clock;
use fireball_core::traits::Ignitor;
use fireball_drivers::SparkIgnitor;
use fireball_hal_rp2040::EmbassyClock;

use crate::channels::{IGNITE, SPARK_DURATION_MS};

/// Poll interval while a spark is running
const SPARK_POLL_MS: u64 = 5;

/// Ignitor handle for the burst controller
pub struct SignalIgnitor;

impl Ignitor for SignalIgnitor {
    fn start(&mut self) {
        IGNITE.signal(());
    }
}

/// Ignitor task - drives the spark output
#[embassy_executor::task]
pub async fn ignitor_task(pin: Output<'static>) {
    info!("Ignitor task started");

    let clock = EmbassyClock;
    let mut ignitor = SparkIgnitor::new(pin, SPARK_DURATION_MS.load(Ordering::Relaxed));

    loop {
        IGNITE.wait().await;

        ignitor.set_duration(SPARK_DURATION_MS.load(Ordering::Relaxed));
        ignitor.start(clock.now());
        debug!("Spark on");

        while ignitor.is_sparking() {
            match select(IGNITE.wait(), Timer::after_millis(SPARK_POLL_MS)).await {
                Either::First(()) => {
                    ignitor.start(clock.now());
                    debug!("Spark extended");
                }
                Either::Second(()) => {
                    ignitor.update(clock.now());
                }
            }
        }

        debug!("Spark off");
        if ignitor.write_faults() > 0 {
            warn!("Ignitor pin write faults: {}", ignitor.write_faults());
        }
    }
}
