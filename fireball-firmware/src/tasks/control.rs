//! Burst control task
//!
//! Owns the burst controller. Commands from the buttons and the console are
//! applied as they arrive; between them the controller is updated every
//! millisecond with the latest pot ceiling.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use fireball_core::config::{SettingError, Settings};
use fireball_core::console::Command;
use fireball_core::{Burst, BurstEvent};
use fireball_hal_rp2040::{EmbassyClock, PwmRgbLed, PwmSolenoid};

use crate::channels::{publish_settings, report, CONTROL_CMD, SETTINGS_SAVE, TARGET_MAX_DUTY};
use crate::report::Report;
use crate::tasks::ignitor::SignalIgnitor;

/// Update interval in milliseconds
pub const CONTROL_INTERVAL_MS: u64 = 1;

/// The burst controller as wired on the board
pub type FireballBurst = Burst<EmbassyClock, PwmSolenoid, PwmRgbLed, SignalIgnitor>;

/// Control task - runs the burst state machine
#[embassy_executor::task]
pub async fn control_task(mut burst: FireballBurst) {
    info!("Control task started in {}", burst.mode().name());

    let mut ticker = Ticker::every(Duration::from_millis(CONTROL_INTERVAL_MS));

    loop {
        match select(CONTROL_CMD.receive(), ticker.next()).await {
            Either::First(command) => handle_command(&mut burst, command),
            Either::Second(()) => {
                let target = TARGET_MAX_DUTY.load(Ordering::Relaxed);
                if let Some(event) = burst.update(target) {
                    debug!("{}", event.message());
                    report(Report::Event(event));
                }
            }
        }
    }
}

/// Apply one command to the controller
fn handle_command(burst: &mut FireballBurst, command: Command) {
    debug!("Command: {:?}", command);

    match command {
        Command::Fire => {
            burst.fire();
            report(Report::Event(BurstEvent::Started));
        }
        Command::End => {
            burst.end();
            report(Report::Event(BurstEvent::Ended));
        }
        Command::Toggle => {
            let event = burst.toggle();
            report(Report::Event(event));
        }
        Command::NextMode => {
            let mode = burst.next_mode();
            info!("Mode: {}", mode.name());
            report(Report::Mode(mode));
        }
        Command::SetMode(mode) => {
            burst.set_mode(mode);
            info!("Mode: {}", mode.name());
            report(Report::Mode(mode));
        }
        Command::Status => report(Report::Status {
            mode: burst.mode(),
            phase: burst.phase(),
            target_max_duty: TARGET_MAX_DUTY.load(Ordering::Relaxed),
            duty: burst.duty(),
        }),
        Command::ShowSettings => report(Report::Settings(*burst.settings())),
        Command::Set(field, value) => {
            let mut settings = *burst.settings();
            match settings.set(field, value) {
                Ok(()) => {
                    apply_settings(burst, settings);
                    report(Report::SettingChanged { field, value });
                }
                Err(SettingError::OutOfRange { field, max }) => {
                    report(Report::OutOfRange { field, max });
                }
            }
        }
        Command::Save => SETTINGS_SAVE.signal(*burst.settings()),
        Command::Defaults => {
            apply_settings(burst, Settings::DEFAULT);
            report(Report::DefaultsRestored);
        }
    }
}

/// Swap the live record and republish the sampled values
fn apply_settings(burst: &mut FireballBurst, settings: Settings) {
    burst.apply_settings(settings);
    publish_settings(&settings);
}
