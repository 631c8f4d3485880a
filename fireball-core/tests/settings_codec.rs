//! Stored settings record encoding

use fireball_core::config::{Settings, SETTINGS_KEY};

#[test]
fn test_stamped_record_survives_encoding() {
    let mut settings = Settings::DEFAULT;
    settings.burst_duration_ms = 400;
    settings.solenoid_duty_min = 180;
    let settings = settings.stamped();

    let mut buf = [0u8; 64];
    let bytes = postcard::to_slice(&settings, &mut buf).unwrap();
    let decoded: Settings = postcard::from_bytes(bytes).unwrap();

    assert_eq!(decoded.valid_key, SETTINGS_KEY);
    assert_eq!(Settings::from_stored(decoded), Some(settings));
}

#[test]
fn test_unstamped_record_is_refused() {
    let mut settings = Settings::DEFAULT;
    settings.burst_delay_ms = 1_000;

    let mut buf = [0u8; 64];
    let bytes = postcard::to_slice(&settings, &mut buf).unwrap();
    let decoded: Settings = postcard::from_bytes(bytes).unwrap();

    assert_eq!(Settings::from_stored(decoded), None);
}

#[test]
fn test_truncated_record_is_rejected() {
    let settings = Settings::DEFAULT.stamped();

    let mut buf = [0u8; 64];
    let len = postcard::to_slice(&settings, &mut buf).unwrap().len();

    assert!(postcard::from_bytes::<Settings>(&buf[..len - 1]).is_err());
}
