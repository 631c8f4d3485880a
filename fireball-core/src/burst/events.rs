//! Events reported by the burst controller

/// Something observable the burst controller just did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BurstEvent {
    /// A burst sequence was started, by request or by the continuous loop
    Started,
    /// Burst was stopped from outside
    Ended,
    /// Full-scale kick applied to the valve
    SolenoidOn,
    /// Kick finished, valve dropped to the holding duty
    ValveOpen,
    /// Burst duration reached in single burst mode
    BurstComplete,
    /// Burst duration reached in continuous burst mode, resting
    Resting,
}

impl BurstEvent {
    /// Diagnostic text line for the event
    pub const fn message(self) -> &'static str {
        match self {
            BurstEvent::Started => "Burst::Start",
            BurstEvent::Ended => "Burst::End",
            BurstEvent::SolenoidOn => "Solenoid On",
            BurstEvent::ValveOpen => "Valve Open",
            BurstEvent::BurstComplete => "Burst Complete",
            BurstEvent::Resting => "Resting",
        }
    }
}
