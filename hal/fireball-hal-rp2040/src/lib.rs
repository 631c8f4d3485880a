//! RP2040-specific HAL for the flamethrower firmware
//!
//! This crate provides RP2040 implementations of the traits the burst logic
//! and the firmware depend on:
//!
//! - Flash storage driver (implements `fireball_hal::FlashStorage`)
//! - PWM solenoid and RGB status LED outputs
//! - Millisecond clock backed by `embassy-time`

#![no_std]

pub mod clock;
pub mod flash;
pub mod pwm;

pub use clock::EmbassyClock;
pub use flash::Rp2040FlashStorage;
pub use pwm::{PwmRgbLed, PwmSolenoid};

// Re-export shared traits from fireball-hal for convenience
pub use fireball_hal::{FlashStorage as FlashStorageTrait, StorageKey};
