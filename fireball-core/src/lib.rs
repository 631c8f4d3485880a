//! Board-agnostic core logic for the flamethrower controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Settings record with compiled-in defaults and schema key
//! - Burst state machine (kick, ramp, hold, rest)
//! - Mode selector and pulsing status indicator
//! - Control input scaling
//! - Serial console command grammar
//! - Hardware abstraction traits (solenoid, status LED, ignitor, clock)

#![no_std]
#![deny(unsafe_code)]

pub mod burst;
pub mod config;
pub mod console;
pub mod indicator;
pub mod input;
pub mod mode;
pub mod time;
pub mod traits;

pub use burst::{Burst, BurstEvent, Phase};
pub use config::Settings;
pub use mode::{Mode, ModeSelector};
pub use time::{Clock, Instant};
