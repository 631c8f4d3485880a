//! Gas solenoid burst control
//!
//! - [`machine`]: phases and the pure per-tick transition
//! - [`ramp`]: duty ramp after the valve kick
//! - [`controller`]: [`Burst`], which owns the outputs and applies transitions
//! - [`events`]: what the controller reports back to its host

pub mod controller;
pub mod events;
pub mod machine;
pub mod ramp;

pub use controller::Burst;
pub use events::BurstEvent;
pub use machine::{transition, Effect, Phase, Step, Tick};
