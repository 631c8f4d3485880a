//! Push-button debouncing
//!
//! A raw reading has to hold steady for the debounce time before it is
//! accepted. Each accepted change yields one event.

use fireball_core::time::Instant;

/// Default settle time for the panel buttons (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 20;

/// Accepted button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Debounce state for one button
#[derive(Debug, Clone)]
pub struct Debouncer {
    debounce_ms: u32,
    /// Last accepted state
    stable: bool,
    /// Most recent raw reading
    candidate: bool,
    /// When the raw reading last changed
    changed_at: Instant,
}

impl Debouncer {
    /// Create a debouncer for a released button
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            stable: false,
            candidate: false,
            changed_at: Instant::from_millis(0),
        }
    }

    /// Feed one raw reading taken at `now`
    pub fn update(&mut self, now: Instant, pressed: bool) -> Option<ButtonEvent> {
        if pressed != self.candidate {
            self.candidate = pressed;
            self.changed_at = now;
        }

        if self.candidate == self.stable
            || now.elapsed_since(self.changed_at) < self.debounce_ms
        {
            return None;
        }

        self.stable = self.candidate;
        Some(if self.stable {
            ButtonEvent::Pressed
        } else {
            ButtonEvent::Released
        })
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u32) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_press_after_settle_time() {
        let mut button = Debouncer::new(20);

        assert_eq!(button.update(at(100), true), None);
        assert_eq!(button.update(at(119), true), None);
        assert_eq!(button.update(at(120), true), Some(ButtonEvent::Pressed));

        // Held: no repeat events
        assert_eq!(button.update(at(500), true), None);
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut button = Debouncer::new(20);

        button.update(at(0), true);
        button.update(at(5), false);
        button.update(at(10), true);
        assert_eq!(button.update(at(25), true), None);
        assert_eq!(button.update(at(30), true), Some(ButtonEvent::Pressed));
    }

    #[test]
    fn test_short_glitch_produces_nothing() {
        let mut button = Debouncer::new(20);

        button.update(at(0), true);
        assert_eq!(button.update(at(10), false), None);
        assert_eq!(button.update(at(100), false), None);
        assert_eq!(button.update(at(200), true), None);
        assert_eq!(button.update(at(220), true), Some(ButtonEvent::Pressed));
    }

    #[test]
    fn test_release_event() {
        let mut button = Debouncer::new(20);
        button.update(at(0), true);
        button.update(at(20), true);

        assert_eq!(button.update(at(50), false), None);
        assert_eq!(button.update(at(70), false), Some(ButtonEvent::Released));
    }

    #[test]
    fn test_zero_debounce_is_immediate() {
        let mut button = Debouncer::new(0);
        assert_eq!(button.update(at(3), true), Some(ButtonEvent::Pressed));
        assert_eq!(button.update(at(4), false), Some(ButtonEvent::Released));
    }
}
