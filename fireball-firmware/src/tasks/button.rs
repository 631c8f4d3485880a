//! Panel button task
//!
//! Both buttons are active low with the internal pull-ups enabled.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use fireball_core::console::Command;
use fireball_core::time::Clock;
use fireball_drivers::{ButtonEvent, Debouncer};
use fireball_hal_rp2040::EmbassyClock;

use crate::channels::CONTROL_CMD;

/// Poll interval in milliseconds
const BUTTON_POLL_MS: u64 = 5;

/// Button task - fire toggles the burst, mode cycles the mode
#[embassy_executor::task]
pub async fn button_task(fire: Input<'static>, mode: Input<'static>) {
    info!("Button task started");

    let clock = EmbassyClock;
    let mut fire_button = Debouncer::default();
    let mut mode_button = Debouncer::default();
    let mut ticker = Ticker::every(Duration::from_millis(BUTTON_POLL_MS));

    loop {
        ticker.next().await;
        let now = clock.now();

        if fire_button.update(now, fire.is_low()) == Some(ButtonEvent::Pressed) {
            debug!("Fire button");
            CONTROL_CMD.send(Command::Toggle).await;
        }

        if mode_button.update(now, mode.is_low()) == Some(ButtonEvent::Pressed) {
            debug!("Mode button");
            CONTROL_CMD.send(Command::NextMode).await;
        }
    }
}
