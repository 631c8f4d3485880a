//! PWM outputs for the solenoid and the RGB status LED
//!
//! Slices run at the default divider with `top = 0xFFFF` (about 1.9kHz at
//! 125MHz). An 8-bit level maps onto the full counter range by multiplying
//! with 257, so 255 is exactly `top`.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fireball_core::traits::{LedChannel, SolenoidValve, StatusLed};

/// Counter wrap value for every slice
pub const PWM_TOP: u16 = 0xFFFF;

/// Compare value for an 8-bit level
pub const fn level_to_compare(level: u8) -> u16 {
    level as u16 * 257
}

fn base_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = PWM_TOP;
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// Gas solenoid on channel A of one slice
pub struct PwmSolenoid {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl PwmSolenoid {
    /// Take over a slice and close the valve
    pub fn new(mut pwm: Pwm<'static>) -> Self {
        let config = base_config();
        pwm.set_config(&config);
        Self { pwm, config }
    }
}

impl SolenoidValve for PwmSolenoid {
    fn set_duty(&mut self, duty: u8) {
        self.config.compare_a = level_to_compare(duty);
        self.pwm.set_config(&self.config);
    }
}

/// RGB status LED spread over two slices
///
/// Red and green share one slice (A/B), blue uses channel A of a second.
pub struct PwmRgbLed {
    red_green: Pwm<'static>,
    blue: Pwm<'static>,
    red_green_config: PwmConfig,
    blue_config: PwmConfig,
}

impl PwmRgbLed {
    /// Take over both slices with every channel dark
    pub fn new(mut red_green: Pwm<'static>, mut blue: Pwm<'static>) -> Self {
        let red_green_config = base_config();
        let blue_config = base_config();
        red_green.set_config(&red_green_config);
        blue.set_config(&blue_config);
        Self {
            red_green,
            blue,
            red_green_config,
            blue_config,
        }
    }
}

impl StatusLed for PwmRgbLed {
    fn set_level(&mut self, channel: LedChannel, level: u8) {
        let compare = level_to_compare(level);
        match channel {
            LedChannel::Red => {
                self.red_green_config.compare_a = compare;
                self.red_green.set_config(&self.red_green_config);
            }
            LedChannel::Green => {
                self.red_green_config.compare_b = compare;
                self.red_green.set_config(&self.red_green_config);
            }
            LedChannel::Blue => {
                self.blue_config.compare_a = compare;
                self.blue.set_config(&self.blue_config);
            }
        }
    }
}
