//! Millisecond clock backed by `embassy-time`

use fireball_core::time::{Clock, Instant};

/// Clock reading the embassy time driver
///
/// The 64-bit tick count is truncated to 32 bits, so the reported value
/// wraps after about 49.7 days. All consumers compare with wrapping
/// subtraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::from_millis(embassy_time::Instant::now().as_millis() as u32)
    }
}
