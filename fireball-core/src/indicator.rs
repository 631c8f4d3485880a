//! Pulsing status indicator
//!
//! The LED breathes once per second in the color of the current mode:
//! brightness rises from 0 to the ceiling during even seconds and falls back
//! during odd seconds. The output is a pure function of the clock and the
//! mode, so there is no state to keep between refreshes.

use crate::mode::Mode;
use crate::time::Instant;
use crate::traits::StatusLed;

/// Length of one brightness ramp (ms)
pub const HALF_PERIOD_MS: u32 = 1_000;

/// Brightness of the triangle wave at `now`
///
/// Integer interpolation, truncating: `ms * max / 1000` on even seconds and
/// its complement on odd seconds. Always within `0..=max`.
pub fn pulse_level(now: Instant, max: u8) -> u8 {
    let ms = now.as_millis() % HALF_PERIOD_MS;
    let sec = now.as_millis() / HALF_PERIOD_MS;
    let rising = (ms * u32::from(max) / HALF_PERIOD_MS) as u8;

    if sec & 1 == 1 {
        max - rising
    } else {
        rising
    }
}

/// Drive the current mode's channel with the pulse level at `now`
///
/// The other two channels are left untouched.
pub fn refresh<L: StatusLed>(led: &mut L, now: Instant, mode: Mode, max: u8) {
    led.set_level(mode.indicator_channel(), pulse_level(now, max));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::LedChannel;

    struct MockLed {
        levels: [u8; 3],
        writes: u32,
    }

    impl StatusLed for MockLed {
        fn set_level(&mut self, channel: LedChannel, level: u8) {
            self.levels[channel.as_index()] = level;
            self.writes += 1;
        }
    }

    fn at(ms: u32) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_rising_on_even_second() {
        assert_eq!(pulse_level(at(0), 64), 0);
        assert_eq!(pulse_level(at(500), 64), 32);
        assert_eq!(pulse_level(at(999), 64), 63);
        assert_eq!(pulse_level(at(2_250), 64), 16);
    }

    #[test]
    fn test_falling_on_odd_second() {
        assert_eq!(pulse_level(at(1_000), 64), 64);
        assert_eq!(pulse_level(at(1_500), 64), 32);
        assert_eq!(pulse_level(at(1_999), 64), 1);
        assert_eq!(pulse_level(at(3_250), 64), 48);
    }

    #[test]
    fn test_odd_second_is_complement() {
        for ms in [0, 1, 137, 500, 999] {
            let even = pulse_level(at(4_000 + ms), 200);
            let odd = pulse_level(at(5_000 + ms), 200);
            assert_eq!(even + odd, 200);
        }
    }

    #[test]
    fn test_zero_ceiling_stays_dark() {
        assert_eq!(pulse_level(at(500), 0), 0);
        assert_eq!(pulse_level(at(1_500), 0), 0);
    }

    #[test]
    fn test_refresh_drives_only_mode_channel() {
        let mut led = MockLed {
            levels: [0; 3],
            writes: 0,
        };

        refresh(&mut led, at(500), Mode::ContinuousBurst, 64);

        assert_eq!(led.writes, 1);
        assert_eq!(led.levels[LedChannel::Red.as_index()], 32);
        assert_eq!(led.levels[LedChannel::Green.as_index()], 0);
        assert_eq!(led.levels[LedChannel::Blue.as_index()], 0);
    }
}
