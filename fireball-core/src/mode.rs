//! Operating mode selection
//!
//! The mode decides what happens when a burst runs out its duration and
//! which color the status LED pulses in. Changing mode never interrupts a
//! burst that is already in progress.

use crate::traits::{LedChannel, StatusLed};

/// Burst operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// One burst of `burst_duration_ms`, then idle
    #[default]
    SingleBurst,
    /// Bursts separated by `burst_delay_ms` rests until stopped
    ContinuousBurst,
    /// Valve stays on the ramp until stopped
    ContinuousFlame,
}

impl Mode {
    /// Every mode, in cycle order
    pub const ALL: [Mode; 3] = [Mode::SingleBurst, Mode::ContinuousBurst, Mode::ContinuousFlame];

    /// The mode that follows this one in the selection cycle
    pub const fn next(self) -> Self {
        match self {
            Mode::SingleBurst => Mode::ContinuousBurst,
            Mode::ContinuousBurst => Mode::ContinuousFlame,
            Mode::ContinuousFlame => Mode::SingleBurst,
        }
    }

    /// Human-readable name for status output
    pub const fn name(self) -> &'static str {
        match self {
            Mode::SingleBurst => "Single Burst",
            Mode::ContinuousBurst => "Continuous Burst",
            Mode::ContinuousFlame => "Continuous Flame",
        }
    }

    /// Console keyword selecting this mode
    pub const fn keyword(self) -> &'static str {
        match self {
            Mode::SingleBurst => "single",
            Mode::ContinuousBurst => "burst",
            Mode::ContinuousFlame => "flame",
        }
    }

    /// Look a mode up by console keyword (case-insensitive)
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.keyword().eq_ignore_ascii_case(word))
    }

    /// Status LED channel that pulses in this mode
    pub const fn indicator_channel(self) -> LedChannel {
        match self {
            Mode::SingleBurst => LedChannel::Blue,
            Mode::ContinuousBurst => LedChannel::Red,
            Mode::ContinuousFlame => LedChannel::Green,
        }
    }
}

/// Holds the current mode and keeps the status LED consistent with it
#[derive(Debug, Clone, Default)]
pub struct ModeSelector {
    mode: Mode,
}

impl ModeSelector {
    /// Current mode
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Advance one step through the mode cycle
    pub fn next_mode<L: StatusLed>(&mut self, led: &mut L) -> Mode {
        self.set_mode(self.mode.next(), led);
        self.mode
    }

    /// Select a mode directly
    ///
    /// All LED channels are switched off so the next indicator refresh only
    /// lights the channel belonging to the new mode.
    pub fn set_mode<L: StatusLed>(&mut self, mode: Mode, led: &mut L) {
        self.mode = mode;
        led.all_off();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock LED recording the last level per channel
    struct MockLed {
        levels: [u8; 3],
    }

    impl MockLed {
        fn lit() -> Self {
            Self { levels: [9, 9, 9] }
        }
    }

    impl StatusLed for MockLed {
        fn set_level(&mut self, channel: LedChannel, level: u8) {
            self.levels[channel.as_index()] = level;
        }
    }

    #[test]
    fn test_cycle_order() {
        assert_eq!(Mode::SingleBurst.next(), Mode::ContinuousBurst);
        assert_eq!(Mode::ContinuousBurst.next(), Mode::ContinuousFlame);
        assert_eq!(Mode::ContinuousFlame.next(), Mode::SingleBurst);
    }

    #[test]
    fn test_three_steps_return_to_start() {
        let mut led = MockLed::lit();

        for start in Mode::ALL {
            let mut selector = ModeSelector::default();
            selector.set_mode(start, &mut led);
            selector.next_mode(&mut led);
            selector.next_mode(&mut led);
            assert_eq!(selector.next_mode(&mut led), start);
        }
    }

    #[test]
    fn test_set_mode_clears_led() {
        let mut led = MockLed::lit();
        let mut selector = ModeSelector::default();

        selector.set_mode(Mode::ContinuousFlame, &mut led);

        assert_eq!(selector.mode(), Mode::ContinuousFlame);
        assert_eq!(led.levels, [0, 0, 0]);
    }

    #[test]
    fn test_each_mode_has_its_own_channel() {
        let channels = Mode::ALL.map(Mode::indicator_channel);
        assert_eq!(
            channels,
            [LedChannel::Blue, LedChannel::Red, LedChannel::Green]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Mode::from_keyword("flame"), Some(Mode::ContinuousFlame));
        assert_eq!(Mode::from_keyword("Single"), Some(Mode::SingleBurst));
        assert_eq!(Mode::from_keyword("BURST"), Some(Mode::ContinuousBurst));
        assert_eq!(Mode::from_keyword("fireball"), None);
    }
}
