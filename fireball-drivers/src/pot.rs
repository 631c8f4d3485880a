//! Control pot sample smoothing
//!
//! The RP2040 ADC resolves 12 bits while the calibrated pot range is
//! expressed in 10 bits. Samples are reduced on entry and averaged over the
//! last `N` readings to keep the ramp ceiling from jittering.

use heapless::HistoryBuffer;

/// Largest value of a reduced sample
pub const POT_FULL_SCALE: u16 = 1023;

/// Moving average over the last `N` pot samples
pub struct PotFilter<const N: usize> {
    samples: HistoryBuffer<u16, N>,
}

impl<const N: usize> PotFilter<N> {
    pub const fn new() -> Self {
        Self {
            samples: HistoryBuffer::new(),
        }
    }

    /// Add a raw 12-bit ADC sample
    ///
    /// Out-of-range bits are discarded.
    pub fn push_raw12(&mut self, raw: u16) {
        self.samples.write((raw & 0x0FFF) >> 2);
    }

    /// Average of the buffered samples, or `None` before the first sample
    pub fn value(&self) -> Option<u16> {
        let samples = self.samples.as_slice();
        if samples.is_empty() {
            return None;
        }

        let sum: u32 = samples.iter().map(|&s| u32::from(s)).sum();
        Some((sum / samples.len() as u32) as u16)
    }
}

impl<const N: usize> Default for PotFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter() {
        let filter = PotFilter::<4>::new();
        assert_eq!(filter.value(), None);
    }

    #[test]
    fn test_reduces_to_ten_bits() {
        let mut filter = PotFilter::<1>::new();

        filter.push_raw12(4095);
        assert_eq!(filter.value(), Some(POT_FULL_SCALE));

        filter.push_raw12(2048);
        assert_eq!(filter.value(), Some(512));

        filter.push_raw12(0xFFFF);
        assert_eq!(filter.value(), Some(POT_FULL_SCALE));
    }

    #[test]
    fn test_average_of_partial_window() {
        let mut filter = PotFilter::<4>::new();
        filter.push_raw12(400);
        filter.push_raw12(800);
        assert_eq!(filter.value(), Some(150));
    }

    #[test]
    fn test_old_samples_drop_out() {
        let mut filter = PotFilter::<4>::new();
        for _ in 0..4 {
            filter.push_raw12(0);
        }
        for _ in 0..4 {
            filter.push_raw12(4000);
        }
        assert_eq!(filter.value(), Some(1000));
    }
}
