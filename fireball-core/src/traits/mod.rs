//! Hardware abstraction traits
//!
//! These traits define the interface between the burst logic and the
//! board-specific outputs and collaborators.

pub mod ignitor;
pub mod output;

pub use ignitor::Ignitor;
pub use output::{LedChannel, SolenoidValve, StatusLed};
