//! Ignition spark trait

/// Spark subsystem trigger
///
/// Fire-and-forget: the burst logic never waits for the spark to finish
/// and does not receive an acknowledgment.
pub trait Ignitor {
    /// Begin a spark sequence
    fn start(&mut self);
}
