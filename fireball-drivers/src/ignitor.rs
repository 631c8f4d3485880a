//! Spark ignitor on a GPIO output
//!
//! The spark coil driver is enabled by holding a pin high. A spark lasts
//! `ignition_duration_ms`; triggering again while sparking moves the end
//! out to a full duration from the new trigger.
//!
//! # Usage
//!
//! ```ignore
//! let mut ignitor = SparkIgnitor::new(pin, settings.ignition_duration_ms);
//! ignitor.start(clock.now());
//!
//! // Periodically:
//! while ignitor.update(clock.now()) {
//!     Timer::after_millis(1).await;
//! }
//! ```

use embedded_hal::digital::OutputPin;
use fireball_core::time::Instant;

/// Spark output driver
pub struct SparkIgnitor<P> {
    pin: P,
    duration_ms: u32,
    /// Trigger time of the current spark
    started_at: Option<Instant>,
    /// Pin writes that returned an error
    write_faults: u32,
}

impl<P: OutputPin> SparkIgnitor<P> {
    /// Create an ignitor with the output driven low
    pub fn new(pin: P, duration_ms: u16) -> Self {
        let mut ignitor = Self {
            pin,
            duration_ms: u32::from(duration_ms),
            started_at: None,
            write_faults: 0,
        };
        ignitor.drive(false);
        ignitor
    }

    /// Begin (or extend) a spark at `now`
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.drive(true);
    }

    /// Stop sparking immediately
    pub fn stop(&mut self) {
        self.started_at = None;
        self.drive(false);
    }

    /// Turn the spark off once its duration has run out
    ///
    /// Returns `true` while still sparking.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };

        if now.elapsed_since(started_at) >= self.duration_ms {
            self.stop();
            false
        } else {
            true
        }
    }

    /// Change the spark length for subsequent updates
    pub fn set_duration(&mut self, duration_ms: u16) {
        self.duration_ms = u32::from(duration_ms);
    }

    /// Check if a spark is in progress
    pub fn is_sparking(&self) -> bool {
        self.started_at.is_some()
    }

    /// Number of failed pin writes since creation
    pub fn write_faults(&self) -> u32 {
        self.write_faults
    }

    fn drive(&mut self, high: bool) {
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() {
            self.write_faults = self.write_faults.saturating_add(1);
        }
    }
}
