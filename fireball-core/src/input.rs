//! Control input scaling
//!
//! The operator dials the maximum flow on a potentiometer. Its raw reading
//! is mapped from the calibrated `[pot_min, pot_max]` span onto the 0-255
//! duty range, which then caps the burst ramp.

use crate::config::Settings;

/// Map a raw pot reading onto 0-255
///
/// Linear between `pot_min` and `pot_max` with truncating division, clamped
/// at both ends. A reversed span (`pot_min > pot_max`) inverts the knob. A
/// zero-width span acts as a threshold at `pot_min`.
pub fn scale_pot(raw: u16, pot_min: u16, pot_max: u16) -> u8 {
    if pot_min == pot_max {
        return if raw >= pot_min { u8::MAX } else { 0 };
    }

    let offset = i32::from(raw) - i32::from(pot_min);
    let span = i32::from(pot_max) - i32::from(pot_min);
    let scaled = offset * i32::from(u8::MAX) / span;

    scaled.clamp(0, i32::from(u8::MAX)) as u8
}

/// Maximum duty for a raw pot reading under `settings`
pub fn target_max_duty(raw: u16, settings: &Settings) -> u8 {
    scale_pot(raw, settings.solenoid_pot_min, settings.solenoid_pot_max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_span() {
        assert_eq!(scale_pot(0, 0, 1023), 0);
        assert_eq!(scale_pot(1023, 0, 1023), 255);
        assert_eq!(scale_pot(512, 0, 1023), 127);
    }

    #[test]
    fn test_readings_outside_span_are_clamped() {
        assert_eq!(scale_pot(50, 100, 900), 0);
        assert_eq!(scale_pot(1000, 100, 900), 255);
    }

    #[test]
    fn test_reversed_span_inverts() {
        assert_eq!(scale_pot(1023, 1023, 0), 0);
        assert_eq!(scale_pot(0, 1023, 0), 255);
    }

    #[test]
    fn test_zero_width_span() {
        assert_eq!(scale_pot(499, 500, 500), 0);
        assert_eq!(scale_pot(500, 500, 500), 255);
    }

    #[test]
    fn test_uses_settings_span() {
        let mut settings = Settings::DEFAULT;
        settings.solenoid_pot_min = 200;
        settings.solenoid_pot_max = 712;

        assert_eq!(target_max_duty(200, &settings), 0);
        assert_eq!(target_max_duty(456, &settings), 127);
        assert_eq!(target_max_duty(712, &settings), 255);
    }
}
