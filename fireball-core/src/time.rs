//! Millisecond time base
//!
//! Timestamps are 32-bit millisecond counters that wrap roughly every
//! 49.7 days. Ordering comparisons between two [`Instant`]s are meaningless
//! across the wrap, so every duration check goes through
//! [`Instant::elapsed_since`], which subtracts with wraparound.

/// A point on the wrapping millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// Create an instant from a raw millisecond count
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond count
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`
    ///
    /// Correct across the counter wrap as long as the real interval is
    /// shorter than the wrap period.
    pub const fn elapsed_since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

/// Source of the current monotonic time
pub trait Clock {
    /// Read the clock
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_simple() {
        let start = Instant::from_millis(1_000);
        let now = Instant::from_millis(1_250);
        assert_eq!(now.elapsed_since(start), 250);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let start = Instant::from_millis(u32::MAX - 9);
        let now = Instant::from_millis(20);
        assert_eq!(now.elapsed_since(start), 30);
    }

    #[test]
    fn test_clock_through_reference() {
        struct Fixed;
        impl Clock for Fixed {
            fn now(&self) -> Instant {
                Instant::from_millis(42)
            }
        }

        fn read<C: Clock>(clock: C) -> u32 {
            clock.now().as_millis()
        }

        assert_eq!(read(&Fixed), 42);
    }
}
