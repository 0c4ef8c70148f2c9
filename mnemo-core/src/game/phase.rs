//! Game phase state machine
//!
//! All panel and display behavior is a function of the current phase
//! and an event. The machine is explicit, finite, and deterministic.

/// Machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for any button press to start a run
    Idle,
    /// Rounds are being generated, played, and matched
    Running,
}

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseEvent {
    /// Any button observed pressed while idle
    AnyButton,
    /// The last life was lost
    OutOfLives,
}

impl Phase {
    /// Process an event and return the next phase
    pub fn transition(self, event: PhaseEvent) -> Self {
        match (self, event) {
            (Phase::Idle, PhaseEvent::AnyButton) => Phase::Running,
            (Phase::Running, PhaseEvent::OutOfLives) => Phase::Idle,

            // Default: stay in current phase
            _ => self,
        }
    }

    /// Check if rounds are being played
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}
