//! Settings persistence
//!
//! Loads the settings record from flash or falls back to compiled-in
//! defaults.

pub mod loader;

pub use loader::{load_settings, save_settings, SettingsError};
