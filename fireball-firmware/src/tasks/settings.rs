//! Settings persistence task
//!
//! Owns the flash storage and serves save requests from the control task,
//! so flash writes never stall the burst loop.

use defmt::*;

use fireball_hal_rp2040::Rp2040FlashStorage;

use crate::channels::{report, SETTINGS_SAVE};
use crate::config::save_settings;
use crate::report::Report;

/// Settings task - writes saved records to flash
#[embassy_executor::task]
pub async fn settings_task(mut storage: Rp2040FlashStorage<'static>) {
    info!("Settings task started");

    loop {
        let settings = SETTINGS_SAVE.wait().await;

        match save_settings(&mut storage, settings).await {
            Ok(()) => report(Report::Saved),
            Err(e) => {
                error!("Failed to save settings: {:?}", e);
                report(Report::SaveFailed);
            }
        }
    }
}
