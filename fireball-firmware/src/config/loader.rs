//! Settings record persistence
//!
//! The record is stored with postcard under [`StorageKey::Settings`]. A
//! missing record, one that fails to decode and one carrying a foreign
//! schema key all resolve to [`Settings::DEFAULT`].

use defmt::*;

use fireball_core::config::Settings;
use fireball_hal_rp2040::flash::{FlashError, Rp2040FlashStorage, StorageKey};
use fireball_hal_rp2040::FlashStorageTrait;

/// Maximum serialized settings size
const MAX_SETTINGS_SIZE: usize = 64;

/// Settings persistence errors
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Flash operation failed
    Flash(FlashError),
    /// Deserialization failed
    Deserialize,
    /// Serialization failed
    Serialize,
    /// Stored record was written for a different layout
    KeyMismatch,
}

impl From<FlashError> for SettingsError {
    fn from(e: FlashError) -> Self {
        SettingsError::Flash(e)
    }
}

/// Load settings from flash
///
/// Returns the stored record and whether it came from flash.
pub async fn load_settings(storage: &mut Rp2040FlashStorage<'_>) -> (Settings, bool) {
    match load_settings_inner(storage).await {
        Ok(settings) => {
            info!("Loaded settings from flash");
            (settings, true)
        }
        Err(SettingsError::Flash(FlashError::NotFound)) => {
            info!("No settings in flash, using defaults");
            (Settings::DEFAULT, false)
        }
        Err(e) => {
            warn!("Failed to load settings: {:?}, using defaults", e);
            (Settings::DEFAULT, false)
        }
    }
}

/// Inner function that returns errors
async fn load_settings_inner(
    storage: &mut Rp2040FlashStorage<'_>,
) -> Result<Settings, SettingsError> {
    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let len = storage.read(StorageKey::Settings, &mut buffer).await?;

    debug!("Read {} bytes of settings from flash", len);

    let stored: Settings =
        postcard::from_bytes(&buffer[..len]).map_err(|_| SettingsError::Deserialize)?;

    Settings::from_stored(stored).ok_or(SettingsError::KeyMismatch)
}

/// Save settings to flash
///
/// Stamps the record with the current schema key before writing.
pub async fn save_settings(
    storage: &mut Rp2040FlashStorage<'_>,
    settings: Settings,
) -> Result<(), SettingsError> {
    let settings = settings.stamped();

    let mut buffer = [0u8; MAX_SETTINGS_SIZE];
    let bytes =
        postcard::to_slice(&settings, &mut buffer).map_err(|_| SettingsError::Serialize)?;

    debug!("Saving {} bytes of settings to flash", bytes.len());

    storage.write(StorageKey::Settings, bytes).await?;

    info!("Saved settings to flash");
    Ok(())
}
