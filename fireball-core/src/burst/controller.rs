//! Burst controller
//!
//! Owns the solenoid, the status LED and the ignitor trigger and applies the
//! transitions computed by [`transition`]. The host calls [`Burst::update`]
//! from its control loop as often as it can; every phase boundary is found
//! by comparing the captured anchor against the clock at call time.
//!
//! # Usage
//!
//! ```ignore
//! let mut burst = Burst::new(clock, valve, led, ignitor, settings);
//! burst.fire();
//!
//! loop {
//!     if let Some(event) = burst.update(target_max_duty) {
//!         log(event.message());
//!     }
//! }
//! ```

use super::events::BurstEvent;
use super::machine::{transition, Effect, Phase, Tick};
use crate::config::Settings;
use crate::indicator;
use crate::mode::{Mode, ModeSelector};
use crate::time::{Clock, Instant};
use crate::traits::output::MAX_DUTY;
use crate::traits::{Ignitor, SolenoidValve, StatusLed};

/// Burst controller state
pub struct Burst<C, V, L, I> {
    clock: C,
    valve: V,
    led: L,
    ignitor: I,
    settings: Settings,
    modes: ModeSelector,
    phase: Phase,
    /// Anchor of the current phase (burst start, or rest start)
    started_at: Instant,
    /// Last duty written to the valve
    duty: u8,
}

impl<C, V, L, I> Burst<C, V, L, I>
where
    C: Clock,
    V: SolenoidValve,
    L: StatusLed,
    I: Ignitor,
{
    /// Create an idle controller
    ///
    /// Closes the valve, darkens the LED and selects single burst mode.
    pub fn new(clock: C, mut valve: V, mut led: L, ignitor: I, settings: Settings) -> Self {
        valve.set_duty(0);
        let mut modes = ModeSelector::default();
        modes.set_mode(Mode::SingleBurst, &mut led);

        let started_at = clock.now();
        Self {
            clock,
            valve,
            led,
            ignitor,
            settings,
            modes,
            phase: Phase::Idle,
            started_at,
            duty: 0,
        }
    }

    /// Start a burst sequence from the top
    ///
    /// Applies the full-scale kick immediately. Allowed from every phase; an
    /// active burst restarts with a new kick.
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.start_at(now);
    }

    /// Start a burst and light it
    pub fn fire(&mut self) {
        self.start();
        self.ignitor.start();
    }

    /// Stop immediately and close the valve
    pub fn end(&mut self) {
        self.write_duty(0);
        self.phase = Phase::Idle;
    }

    /// Stop when active, fire otherwise
    pub fn toggle(&mut self) -> BurstEvent {
        if self.is_active() {
            self.end();
            BurstEvent::Ended
        } else {
            self.fire();
            BurstEvent::Started
        }
    }

    /// Check if a burst sequence is in progress
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Advance the state machine and refresh the status LED
    ///
    /// `target_max_duty` is the operator ceiling sampled for this tick.
    pub fn update(&mut self, target_max_duty: u8) -> Option<BurstEvent> {
        let now = self.clock.now();
        indicator::refresh(
            &mut self.led,
            now,
            self.modes.mode(),
            self.settings.max_led_brightness,
        );

        let tick = Tick {
            elapsed_ms: now.elapsed_since(self.started_at),
            mode: self.modes.mode(),
            target_max_duty,
        };
        let step = transition(self.phase, tick, &self.settings);

        if let Some(duty) = step.duty {
            self.write_duty(duty);
        }
        self.phase = step.phase;

        match step.effect {
            Effect::None => {}
            Effect::RestartTimer => self.started_at = now,
            Effect::Relight => {
                self.start_at(now);
                self.ignitor.start();
            }
        }

        step.event
    }

    /// Advance to the next mode
    pub fn next_mode(&mut self) -> Mode {
        self.modes.next_mode(&mut self.led)
    }

    /// Select a mode directly
    pub fn set_mode(&mut self, mode: Mode) {
        self.modes.set_mode(mode, &mut self.led);
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last duty written to the valve
    pub fn duty(&self) -> u8 {
        self.duty
    }

    /// Active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replace the active settings
    ///
    /// Takes effect from the next update; a running burst keeps its anchor.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Get access to the solenoid output
    pub fn valve(&self) -> &V {
        &self.valve
    }

    /// Get access to the status LED
    pub fn led(&self) -> &L {
        &self.led
    }

    /// Get access to the ignitor
    pub fn ignitor(&self) -> &I {
        &self.ignitor
    }

    fn start_at(&mut self, now: Instant) {
        self.write_duty(MAX_DUTY);
        self.phase = Phase::Triggering;
        self.started_at = now;
    }

    fn write_duty(&mut self, duty: u8) {
        self.duty = duty;
        self.valve.set_duty(duty);
    }
}
