//! Burst state machine definition
//!
//! The solenoid output during a burst is a function of the current phase,
//! the time elapsed since the phase anchor, the mode and the settings.
//!
//! ```text
//! duty
//! 255    ___
//!       |   |     ________
//!       |   |    /        |
//!       |   |   /         |
//!       |   |__/          |
//!       |   duty_min      |
//!   0 __|                 |________
//!       ^kick ^ramp  ^hold ^off / rest
//! ```

use super::events::BurstEvent;
use super::ramp::ramp_duty;
use crate::config::Settings;
use crate::mode::Mode;
use crate::traits::output::MAX_DUTY;

/// Burst lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Valve closed, waiting for a start
    #[default]
    Idle,
    /// Full-scale kick applied; the next tick moves on to `ValveOpening`
    Triggering,
    /// Kick held until the valve is known to be open
    ValveOpening,
    /// Duty climbing from the holding minimum toward the operator ceiling
    Ramping,
    /// Valve closed between bursts in continuous burst mode
    Resting,
}

impl Phase {
    /// Check if a burst sequence is in progress
    pub const fn is_active(self) -> bool {
        !matches!(self, Phase::Idle)
    }

    /// Human-readable name for status output
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Triggering => "Triggering",
            Phase::ValveOpening => "Valve Opening",
            Phase::Ramping => "Ramping",
            Phase::Resting => "Resting",
        }
    }
}

/// Inputs sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Milliseconds since the phase anchor
    pub elapsed_ms: u32,
    /// Current operating mode
    pub mode: Mode,
    /// Operator ceiling for the ramp (0-255)
    pub target_max_duty: u8,
}

/// Side effect the owner of the state machine must carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Move the phase anchor to now
    RestartTimer,
    /// Restart the burst from the kick and fire the ignitor
    Relight,
}

/// Result of one transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Phase after the tick
    pub phase: Phase,
    /// New solenoid duty, if it changes this tick
    pub duty: Option<u8>,
    pub effect: Effect,
    pub event: Option<BurstEvent>,
}

impl Step {
    const fn stay(phase: Phase) -> Self {
        Self {
            phase,
            duty: None,
            effect: Effect::None,
            event: None,
        }
    }
}

/// Process one tick and return the next phase
///
/// This is the core transition logic. It has no side effects; the caller
/// applies `duty` and `effect`.
pub fn transition(phase: Phase, tick: Tick, settings: &Settings) -> Step {
    match phase {
        Phase::Idle => Step::stay(Phase::Idle),

        // Slam the valve fully open so it reliably unseats
        Phase::Triggering => Step {
            phase: Phase::ValveOpening,
            duty: Some(MAX_DUTY),
            effect: Effect::None,
            event: Some(BurstEvent::SolenoidOn),
        },

        Phase::ValveOpening => {
            if tick.elapsed_ms >= u32::from(settings.solenoid_initial_open_duration_ms) {
                Step {
                    phase: Phase::Ramping,
                    duty: Some(settings.solenoid_duty_min),
                    effect: Effect::None,
                    event: Some(BurstEvent::ValveOpen),
                }
            } else {
                Step::stay(Phase::ValveOpening)
            }
        }

        Phase::Ramping => {
            let duty = ramp_duty(tick.elapsed_ms, settings, tick.target_max_duty);
            let done = tick.elapsed_ms >= u32::from(settings.burst_duration_ms);

            match tick.mode {
                Mode::SingleBurst if done => Step {
                    phase: Phase::Idle,
                    duty: Some(0),
                    effect: Effect::None,
                    event: Some(BurstEvent::BurstComplete),
                },
                Mode::ContinuousBurst if done => Step {
                    phase: Phase::Resting,
                    duty: Some(0),
                    effect: Effect::RestartTimer,
                    event: Some(BurstEvent::Resting),
                },
                // Continuous flame only stops on an explicit end
                _ => Step {
                    phase: Phase::Ramping,
                    duty: Some(duty),
                    effect: Effect::None,
                    event: None,
                },
            }
        }

        Phase::Resting => {
            if tick.elapsed_ms >= u32::from(settings.burst_delay_ms) {
                Step {
                    phase: Phase::Triggering,
                    duty: None,
                    effect: Effect::Relight,
                    event: Some(BurstEvent::Started),
                }
            } else {
                Step::stay(Phase::Resting)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(elapsed_ms: u32, mode: Mode) -> Tick {
        Tick {
            elapsed_ms,
            mode,
            target_max_duty: 255,
        }
    }

    #[test]
    fn test_idle_is_inert() {
        for mode in Mode::ALL {
            let step = transition(Phase::Idle, tick(1_000_000, mode), &Settings::DEFAULT);
            assert_eq!(step, Step::stay(Phase::Idle));
        }
    }

    #[test]
    fn test_triggering_kicks_immediately() {
        let step = transition(Phase::Triggering, tick(0, Mode::SingleBurst), &Settings::DEFAULT);
        assert_eq!(step.phase, Phase::ValveOpening);
        assert_eq!(step.duty, Some(255));
        assert_eq!(step.event, Some(BurstEvent::SolenoidOn));
    }

    #[test]
    fn test_valve_opening_holds_until_initial_duration() {
        let settings = Settings::DEFAULT;

        let held = transition(Phase::ValveOpening, tick(49, Mode::SingleBurst), &settings);
        assert_eq!(held, Step::stay(Phase::ValveOpening));

        let opened = transition(Phase::ValveOpening, tick(50, Mode::SingleBurst), &settings);
        assert_eq!(opened.phase, Phase::Ramping);
        assert_eq!(opened.duty, Some(220));
        assert_eq!(opened.event, Some(BurstEvent::ValveOpen));
    }

    #[test]
    fn test_ramping_single_burst_finishes_idle() {
        let settings = Settings::DEFAULT;

        let running = transition(Phase::Ramping, tick(249, Mode::SingleBurst), &settings);
        assert_eq!(running.phase, Phase::Ramping);
        assert_eq!(running.duty, Some(255));

        let done = transition(Phase::Ramping, tick(250, Mode::SingleBurst), &settings);
        assert_eq!(done.phase, Phase::Idle);
        assert_eq!(done.duty, Some(0));
        assert_eq!(done.effect, Effect::None);
        assert_eq!(done.event, Some(BurstEvent::BurstComplete));
    }

    #[test]
    fn test_ramping_continuous_burst_rests() {
        let step = transition(Phase::Ramping, tick(300, Mode::ContinuousBurst), &Settings::DEFAULT);
        assert_eq!(step.phase, Phase::Resting);
        assert_eq!(step.duty, Some(0));
        assert_eq!(step.effect, Effect::RestartTimer);
    }

    #[test]
    fn test_ramping_continuous_flame_never_times_out() {
        for elapsed in [250, 10_000, 600_000, u32::MAX] {
            let step = transition(Phase::Ramping, tick(elapsed, Mode::ContinuousFlame), &Settings::DEFAULT);
            assert_eq!(step.phase, Phase::Ramping);
            assert_eq!(step.effect, Effect::None);
        }
    }

    #[test]
    fn test_ramping_respects_ceiling() {
        let step = transition(
            Phase::Ramping,
            Tick {
                elapsed_ms: 60,
                mode: Mode::ContinuousFlame,
                target_max_duty: 230,
            },
            &Settings::DEFAULT,
        );
        assert_eq!(step.duty, Some(230));
    }

    #[test]
    fn test_resting_relights_after_delay() {
        let settings = Settings::DEFAULT;

        let resting = transition(Phase::Resting, tick(99, Mode::ContinuousBurst), &settings);
        assert_eq!(resting, Step::stay(Phase::Resting));

        let relit = transition(Phase::Resting, tick(100, Mode::ContinuousBurst), &settings);
        assert_eq!(relit.phase, Phase::Triggering);
        assert_eq!(relit.effect, Effect::Relight);
        assert_eq!(relit.event, Some(BurstEvent::Started));
    }

    #[test]
    fn test_phase_activity() {
        assert!(!Phase::Idle.is_active());
        assert!(Phase::Triggering.is_active());
        assert!(Phase::ValveOpening.is_active());
        assert!(Phase::Ramping.is_active());
        assert!(Phase::Resting.is_active());
    }
}
