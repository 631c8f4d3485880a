//! Tunable settings record
//!
//! One flat record holds every parameter the burst logic, the control input
//! scaling, the ignitor and the status LED consume. It is persisted as-is;
//! `valid_key` identifies the record layout so that a record written by a
//! different firmware revision is ignored instead of misread.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Schema key stamped into saved records
///
/// Change this whenever a field is added, removed or reinterpreted.
pub const SETTINGS_KEY: u16 = 345;

/// Upper bound of the raw control potentiometer range
pub const POT_RANGE_MAX: u16 = 1023;

/// Burst, solenoid and indicator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Length of one fireball burst, measured from the start of the kick (ms)
    pub burst_duration_ms: u16,
    /// How long the ignitor sparks per trigger (ms)
    pub ignition_duration_ms: u16,
    /// Rest between bursts in continuous burst mode (ms)
    pub burst_delay_ms: u16,
    /// Potentiometer reading mapped to zero duty (0-1023)
    pub solenoid_pot_min: u16,
    /// Potentiometer reading mapped to full duty (0-1023)
    pub solenoid_pot_max: u16,
    /// Lowest duty that keeps an opened valve open
    pub solenoid_duty_min: u8,
    /// Full-scale kick time before dropping to `solenoid_duty_min` (ms)
    pub solenoid_initial_open_duration_ms: u16,
    /// Duty increase per second of ramp time
    ///
    /// 1024 sweeps the whole 0-255 range in a quarter second.
    pub solenoid_acceleration: u16,
    /// Brightness ceiling for the status LED
    pub max_led_brightness: u8,
    /// Layout marker, equals [`SETTINGS_KEY`] on saved records
    pub valid_key: u16,
}

impl Settings {
    /// Compiled-in defaults used when nothing valid is stored
    pub const DEFAULT: Self = Self {
        burst_duration_ms: 250,
        ignition_duration_ms: 200,
        burst_delay_ms: 100,
        solenoid_pot_min: 0,
        solenoid_pot_max: POT_RANGE_MAX,
        solenoid_duty_min: 220,
        solenoid_initial_open_duration_ms: 50,
        solenoid_acceleration: 1024,
        max_led_brightness: 64,
        valid_key: 0,
    };

    /// Check if the record carries the current schema key
    pub const fn is_valid(&self) -> bool {
        self.valid_key == SETTINGS_KEY
    }

    /// Accept a record read from storage
    ///
    /// Returns `None` for a record carrying a foreign key; the caller treats
    /// it as absent.
    pub fn from_stored(stored: Self) -> Option<Self> {
        if stored.is_valid() {
            Some(stored)
        } else {
            None
        }
    }

    /// Copy of this record stamped for saving
    pub const fn stamped(mut self) -> Self {
        self.valid_key = SETTINGS_KEY;
        self
    }

    /// Read a tunable field
    pub const fn get(&self, field: SettingField) -> u16 {
        match field {
            SettingField::BurstDuration => self.burst_duration_ms,
            SettingField::IgnitionDuration => self.ignition_duration_ms,
            SettingField::BurstDelay => self.burst_delay_ms,
            SettingField::PotMin => self.solenoid_pot_min,
            SettingField::PotMax => self.solenoid_pot_max,
            SettingField::DutyMin => self.solenoid_duty_min as u16,
            SettingField::InitialOpen => self.solenoid_initial_open_duration_ms,
            SettingField::Acceleration => self.solenoid_acceleration,
            SettingField::MaxLed => self.max_led_brightness as u16,
        }
    }

    /// Write a tunable field
    ///
    /// Rejects values outside the field's range and leaves the record
    /// unchanged in that case.
    pub fn set(&mut self, field: SettingField, value: u16) -> Result<(), SettingError> {
        if value > field.max_value() {
            return Err(SettingError::OutOfRange {
                field,
                max: field.max_value(),
            });
        }

        match field {
            SettingField::BurstDuration => self.burst_duration_ms = value,
            SettingField::IgnitionDuration => self.ignition_duration_ms = value,
            SettingField::BurstDelay => self.burst_delay_ms = value,
            SettingField::PotMin => self.solenoid_pot_min = value,
            SettingField::PotMax => self.solenoid_pot_max = value,
            SettingField::DutyMin => self.solenoid_duty_min = value as u8,
            SettingField::InitialOpen => self.solenoid_initial_open_duration_ms = value,
            SettingField::Acceleration => self.solenoid_acceleration = value,
            SettingField::MaxLed => self.max_led_brightness = value as u8,
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Identifier for each operator-tunable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingField {
    BurstDuration,
    IgnitionDuration,
    BurstDelay,
    PotMin,
    PotMax,
    DutyMin,
    InitialOpen,
    Acceleration,
    MaxLed,
}

impl SettingField {
    /// Every field, in record order
    pub const ALL: [SettingField; 9] = [
        SettingField::BurstDuration,
        SettingField::IgnitionDuration,
        SettingField::BurstDelay,
        SettingField::PotMin,
        SettingField::PotMax,
        SettingField::DutyMin,
        SettingField::InitialOpen,
        SettingField::Acceleration,
        SettingField::MaxLed,
    ];

    /// Console name of the field
    pub const fn name(self) -> &'static str {
        match self {
            SettingField::BurstDuration => "burst_duration",
            SettingField::IgnitionDuration => "ignition_duration",
            SettingField::BurstDelay => "burst_delay",
            SettingField::PotMin => "pot_min",
            SettingField::PotMax => "pot_max",
            SettingField::DutyMin => "duty_min",
            SettingField::InitialOpen => "initial_open",
            SettingField::Acceleration => "acceleration",
            SettingField::MaxLed => "max_led",
        }
    }

    /// Look a field up by console name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    /// Largest accepted value
    pub const fn max_value(self) -> u16 {
        match self {
            SettingField::PotMin | SettingField::PotMax => POT_RANGE_MAX,
            SettingField::DutyMin | SettingField::MaxLed => u8::MAX as u16,
            _ => u16::MAX,
        }
    }
}

/// Errors from editing the settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingError {
    /// Value exceeds what the field can hold
    OutOfRange { field: SettingField, max: u16 },
}
