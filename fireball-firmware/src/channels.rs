//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication, plus a few
//! atomics for values that are sampled rather than queued.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU16, AtomicU8};

use fireball_core::config::Settings;
use fireball_core::console::Command;

use crate::report::Report;

/// Channel capacity for control commands
const COMMAND_CHANNEL_SIZE: usize = 8;

/// Channel capacity for console reports
const REPORT_CHANNEL_SIZE: usize = 16;

/// Commands for the control task (buttons and console)
pub static CONTROL_CMD: Channel<CriticalSectionRawMutex, Command, COMMAND_CHANNEL_SIZE> =
    Channel::new();

/// Lines for the console transmitter
pub static REPORTS: Channel<CriticalSectionRawMutex, Report, REPORT_CHANNEL_SIZE> =
    Channel::new();

/// Spark request from the burst controller
pub static IGNITE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Settings record to persist (latest request wins)
pub static SETTINGS_SAVE: Signal<CriticalSectionRawMutex, Settings> = Signal::new();

/// Ramp ceiling from the control pot (0-255), written by the pot task
pub static TARGET_MAX_DUTY: AtomicU8 = AtomicU8::new(0);

/// Calibrated pot span, published by the control task
pub static POT_MIN: AtomicU16 = AtomicU16::new(Settings::DEFAULT.solenoid_pot_min);
pub static POT_MAX: AtomicU16 = AtomicU16::new(Settings::DEFAULT.solenoid_pot_max);

/// Spark length in ms, published by the control task
pub static SPARK_DURATION_MS: AtomicU16 =
    AtomicU16::new(Settings::DEFAULT.ignition_duration_ms);

/// Make a settings record visible to the tasks that sample it
pub fn publish_settings(settings: &Settings) {
    use portable_atomic::Ordering;

    POT_MIN.store(settings.solenoid_pot_min, Ordering::Relaxed);
    POT_MAX.store(settings.solenoid_pot_max, Ordering::Relaxed);
    SPARK_DURATION_MS.store(settings.ignition_duration_ms, Ordering::Relaxed);
}

/// Queue a console report, dropping it if the transmitter is behind
pub fn report(report: Report) {
    if REPORTS.try_send(report).is_err() {
        defmt::warn!("Report channel full, dropping report");
    }
}
