//! Solenoid flow ramp
//!
//! After the kick the valve is held at `solenoid_duty_min` and the duty
//! climbs with elapsed burst time at `solenoid_acceleration` units per
//! second, so that the gas lights before the flow reaches full rate. The
//! climb is modeled over at most [`RAMP_WINDOW_MS`]; later ticks hold the
//! value reached at the end of the window.
//!
//! Time math is integer and truncating: `floor(elapsed_ms * accel / 1000)`.

use crate::config::Settings;

/// Longest elapsed time that still increases the ramp (ms)
pub const RAMP_WINDOW_MS: u32 = 10_000;

/// Duty gained by the ramp after `elapsed_ms`
pub fn ramp_offset(elapsed_ms: u32, acceleration: u16) -> u32 {
    elapsed_ms.min(RAMP_WINDOW_MS) * u32::from(acceleration) / 1_000
}

/// Ramped duty before the operator ceiling is applied
///
/// May exceed 255; [`ramp_duty`] bounds it.
pub fn unclamped_duty(elapsed_ms: u32, settings: &Settings) -> u32 {
    u32::from(settings.solenoid_duty_min) + ramp_offset(elapsed_ms, settings.solenoid_acceleration)
}

/// Commanded duty for a ramping tick
///
/// Never exceeds `target_max_duty`, including when the ceiling sits below
/// the holding minimum.
pub fn ramp_duty(elapsed_ms: u32, settings: &Settings, target_max_duty: u8) -> u8 {
    unclamped_duty(elapsed_ms, settings).min(u32::from(target_max_duty)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slow_settings() -> Settings {
        Settings {
            solenoid_duty_min: 100,
            solenoid_acceleration: 10,
            ..Settings::DEFAULT
        }
    }

    #[test]
    fn test_starts_at_duty_min() {
        let settings = slow_settings();
        assert_eq!(unclamped_duty(0, &settings), 100);
        assert_eq!(ramp_duty(0, &settings, 255), 100);
    }

    #[test]
    fn test_truncating_rate() {
        let settings = slow_settings();
        // 10 units/s -> one unit every 100ms
        assert_eq!(unclamped_duty(99, &settings), 100);
        assert_eq!(unclamped_duty(100, &settings), 101);
        assert_eq!(unclamped_duty(5_050, &settings), 150);
    }

    #[test]
    fn test_flat_after_window() {
        let settings = slow_settings();
        let at_window = unclamped_duty(RAMP_WINDOW_MS, &settings);
        assert_eq!(at_window, 200);
        assert_eq!(unclamped_duty(RAMP_WINDOW_MS + 1, &settings), at_window);
        assert_eq!(unclamped_duty(60_000, &settings), at_window);
        assert_eq!(unclamped_duty(u32::MAX, &settings), at_window);
    }

    #[test]
    fn test_default_acceleration_hits_ceiling_fast() {
        let settings = Settings::DEFAULT;
        // 220 + floor(0.1 * 1024) = 322, clamped by the pot ceiling
        assert_eq!(unclamped_duty(100, &settings), 322);
        assert_eq!(ramp_duty(100, &settings, 255), 255);
    }

    #[test]
    fn test_ceiling_below_duty_min() {
        let settings = Settings::DEFAULT;
        assert_eq!(ramp_duty(0, &settings, 150), 150);
        assert_eq!(ramp_duty(0, &settings, 0), 0);
    }

    #[test]
    fn test_max_acceleration_does_not_overflow() {
        let settings = Settings {
            solenoid_duty_min: 255,
            solenoid_acceleration: u16::MAX,
            ..Settings::DEFAULT
        };
        assert_eq!(unclamped_duty(u32::MAX, &settings), 255 + 655_350);
        assert_eq!(ramp_duty(u32::MAX, &settings, 255), 255);
    }
}
