//! Console report lines
//!
//! The control and settings tasks describe what happened as a [`Report`];
//! the console transmitter renders it to text. Every rendered report ends
//! in CRLF.

use core::fmt::{self, Write};

use fireball_core::burst::{BurstEvent, Phase};
use fireball_core::config::{SettingField, Settings};
use fireball_core::mode::Mode;

/// Something the console operator should see
#[derive(Debug, Clone, Copy)]
pub enum Report {
    /// Firmware came up with these settings
    Booted { from_flash: bool },
    Event(BurstEvent),
    Mode(Mode),
    Status {
        mode: Mode,
        phase: Phase,
        target_max_duty: u8,
        duty: u8,
    },
    Settings(Settings),
    SettingChanged { field: SettingField, value: u16 },
    OutOfRange { field: SettingField, max: u16 },
    DefaultsRestored,
    Saved,
    SaveFailed,
    /// Console line could not be parsed
    Rejected(&'static str),
}

impl Report {
    /// Render the report as console text
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        match *self {
            Report::Booted { from_flash } => {
                let source = if from_flash { "flash" } else { "defaults" };
                write!(out, "Fireball ready (settings from {})\r\n", source)
            }
            Report::Event(event) => write!(out, "{}\r\n", event.message()),
            Report::Mode(mode) => write!(out, "{}\r\n", mode.name()),
            Report::Status {
                mode,
                phase,
                target_max_duty,
                duty,
            } => write!(
                out,
                "mode={} state={} target={} duty={}\r\n",
                mode.keyword(),
                phase.name(),
                target_max_duty,
                duty
            ),
            Report::Settings(settings) => {
                for field in SettingField::ALL {
                    write!(out, "{}={}\r\n", field.name(), settings.get(field))?;
                }
                Ok(())
            }
            Report::SettingChanged { field, value } => {
                write!(out, "{}={}\r\n", field.name(), value)
            }
            Report::OutOfRange { field, max } => {
                write!(out, "error: {} must be 0-{}\r\n", field.name(), max)
            }
            Report::DefaultsRestored => out.write_str("Defaults restored\r\n"),
            Report::Saved => out.write_str("Settings saved\r\n"),
            Report::SaveFailed => out.write_str("error: save failed\r\n"),
            Report::Rejected(reason) => write!(out, "error: {}\r\n", reason),
        }
    }
}
