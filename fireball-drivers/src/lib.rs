//! Hardware driver implementations
//!
//! Drivers in this crate sit between `embedded-hal` peripherals and the
//! burst logic in fireball-core. None of them know about a specific chip:
//!
//! - Spark ignitor timing on a GPIO output
//! - Push-button debouncing
//! - Control pot sample smoothing

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod ignitor;
pub mod pot;

pub use button::{ButtonEvent, Debouncer};
pub use ignitor::SparkIgnitor;
pub use pot::PotFilter;
