//! Configuration types
//!
//! Board-agnostic settings record stored as postcard binary data.

pub mod settings;

pub use settings::*;
