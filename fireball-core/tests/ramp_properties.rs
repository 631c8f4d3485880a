//! Property checks for the burst ramp, pot scaling and the status pulse

use fireball_core::burst::ramp::{ramp_duty, unclamped_duty, RAMP_WINDOW_MS};
use fireball_core::indicator::pulse_level;
use fireball_core::input::scale_pot;
use fireball_core::{Instant, Settings};
use proptest::prelude::*;

fn settings(duty_min: u8, acceleration: u16) -> Settings {
    Settings {
        solenoid_duty_min: duty_min,
        solenoid_acceleration: acceleration,
        ..Settings::DEFAULT
    }
}

proptest! {
    #[test]
    fn ramp_never_decreases(
        duty_min in any::<u8>(),
        acceleration in any::<u16>(),
        target in any::<u8>(),
        a in 0..=RAMP_WINDOW_MS,
        b in 0..=RAMP_WINDOW_MS,
    ) {
        let s = settings(duty_min, acceleration);
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ramp_duty(early, &s, target) <= ramp_duty(late, &s, target));
    }

    #[test]
    fn ramp_never_exceeds_target(
        duty_min in any::<u8>(),
        acceleration in any::<u16>(),
        target in any::<u8>(),
        elapsed in any::<u32>(),
    ) {
        let s = settings(duty_min, acceleration);
        prop_assert!(ramp_duty(elapsed, &s, target) <= target);
    }

    #[test]
    fn ramp_is_flat_after_window(
        duty_min in any::<u8>(),
        acceleration in any::<u16>(),
        elapsed in RAMP_WINDOW_MS..,
    ) {
        let s = settings(duty_min, acceleration);
        prop_assert_eq!(
            unclamped_duty(elapsed, &s),
            u32::from(duty_min) + 10 * u32::from(acceleration)
        );
    }

    #[test]
    fn pulse_stays_under_ceiling(now in any::<u32>(), max in any::<u8>()) {
        prop_assert!(pulse_level(Instant::from_millis(now), max) <= max);
    }

    #[test]
    fn pot_scaling_is_monotonic(
        pot_min in 0u16..=1023,
        pot_max in 0u16..=1023,
        a in 0u16..=1023,
        b in 0u16..=1023,
    ) {
        prop_assume!(pot_min < pot_max);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(scale_pot(low, pot_min, pot_max) <= scale_pot(high, pot_min, pot_max));
    }
}
