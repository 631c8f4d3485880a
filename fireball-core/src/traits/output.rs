//! Duty-modulated output traits

/// Full-scale solenoid duty
pub const MAX_DUTY: u8 = 255;

/// Trait for the gas solenoid output
///
/// Duty 0 closes the valve, [`MAX_DUTY`] drives it fully open.
pub trait SolenoidValve {
    /// Command a new duty value
    fn set_duty(&mut self, duty: u8);
}

/// Color channel of the RGB status LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    Red,
    Green,
    Blue,
}

impl LedChannel {
    /// Every channel, in wiring order
    pub const ALL: [LedChannel; 3] = [LedChannel::Red, LedChannel::Green, LedChannel::Blue];

    /// Deterministic index for per-channel arrays
    pub const fn as_index(self) -> usize {
        match self {
            LedChannel::Red => 0,
            LedChannel::Green => 1,
            LedChannel::Blue => 2,
        }
    }
}

/// Trait for the RGB status LED
///
/// Levels are raw output values; the caller keeps them within the
/// configured brightness ceiling.
pub trait StatusLed {
    /// Set a single channel's level
    fn set_level(&mut self, channel: LedChannel, level: u8);

    /// Switch every channel off
    fn all_off(&mut self) {
        for channel in LedChannel::ALL {
            self.set_level(channel, 0);
        }
    }
}
