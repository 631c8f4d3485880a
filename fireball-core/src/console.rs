//! Serial console command grammar
//!
//! Line oriented, whitespace separated and case-insensitive:
//!
//! ```text
//! start | fire            fire a burst
//! end | stop              stop immediately
//! next                    advance the mode
//! mode single|burst|flame select a mode
//! status                  mode, phase and target duty
//! settings                list every settings field
//! set <field> <value>     change one field in the live record
//! save                    persist the live record
//! defaults                restore compiled-in defaults
//! ```
//!
//! Parsing only checks syntax. Range checks against the settings record
//! happen when a `Set` is applied.

use crate::config::SettingField;
use crate::mode::Mode;

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Fire,
    End,
    /// Stop when active, fire otherwise (fire button)
    Toggle,
    NextMode,
    SetMode(Mode),
    Status,
    ShowSettings,
    Set(SettingField, u16),
    Save,
    Defaults,
}

/// Reasons a console line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line was blank
    Empty,
    UnknownCommand,
    MissingArgument,
    /// Value is not a decimal u16
    InvalidNumber,
    UnknownField,
    UnknownMode,
    /// Extra words after a complete command
    TrailingInput,
}

impl ParseError {
    /// Text reported back on the console
    pub const fn message(self) -> &'static str {
        match self {
            ParseError::Empty => "empty line",
            ParseError::UnknownCommand => "unknown command",
            ParseError::MissingArgument => "missing argument",
            ParseError::InvalidNumber => "invalid number",
            ParseError::UnknownField => "unknown field",
            ParseError::UnknownMode => "unknown mode",
            ParseError::TrailingInput => "unexpected input after command",
        }
    }
}

/// Parse one console line
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut words = line.split_ascii_whitespace();
    let verb = words.next().ok_or(ParseError::Empty)?;

    let command = if matches_any(verb, &["start", "fire"]) {
        Command::Fire
    } else if matches_any(verb, &["end", "stop"]) {
        Command::End
    } else if verb.eq_ignore_ascii_case("next") {
        Command::NextMode
    } else if verb.eq_ignore_ascii_case("mode") {
        let word = words.next().ok_or(ParseError::MissingArgument)?;
        Command::SetMode(Mode::from_keyword(word).ok_or(ParseError::UnknownMode)?)
    } else if verb.eq_ignore_ascii_case("status") {
        Command::Status
    } else if verb.eq_ignore_ascii_case("settings") {
        Command::ShowSettings
    } else if verb.eq_ignore_ascii_case("set") {
        let name = words.next().ok_or(ParseError::MissingArgument)?;
        let field = SettingField::from_name(name).ok_or(ParseError::UnknownField)?;
        let value = words.next().ok_or(ParseError::MissingArgument)?;
        let value = value.parse::<u16>().map_err(|_| ParseError::InvalidNumber)?;
        Command::Set(field, value)
    } else if verb.eq_ignore_ascii_case("save") {
        Command::Save
    } else if verb.eq_ignore_ascii_case("defaults") {
        Command::Defaults
    } else {
        return Err(ParseError::UnknownCommand);
    };

    if words.next().is_some() {
        return Err(ParseError::TrailingInput);
    }
    Ok(command)
}

fn matches_any(word: &str, candidates: &[&str]) -> bool {
    candidates.iter().any(|c| c.eq_ignore_ascii_case(word))
}
