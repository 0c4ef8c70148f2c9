//! Game session bookkeeping - level and lives

use crate::config::GameConfig;
use crate::sequence::MAX_SEQUENCE_LEN;

/// Mutable per-run state
///
/// Created once at program start with no lives; `start` re-initializes
/// it on every Idle -> Running transition. Lives only decrease while a
/// run is in progress, and hitting zero ends the run.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameSession {
    level: u16,
    lives: u8,
}

impl GameSession {
    /// Fresh session, as at program start (idle, no lives)
    pub fn new() -> Self {
        Self { level: 1, lives: 0 }
    }

    /// Re-initialize for a new run
    pub fn start(&mut self, config: &GameConfig) {
        self.level = 1;
        self.lives = config.starting_lives;
    }

    /// Current level (>= 1)
    pub fn level(&self) -> u16 {
        self.level
    }

    /// Remaining lives
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Sequence length for the current level: one extra symbol every
    /// three levels, starting at three
    pub fn round_len(&self) -> usize {
        (self.level as usize / 3 + 3).min(MAX_SEQUENCE_LEN)
    }

    /// Advance the level
    ///
    /// Called after a round is played but before its outcome is known -
    /// a failed round still counts as level progress, both for
    /// difficulty scaling and for the "Level Reached" message. That is
    /// how the game has always behaved; do not "fix" it here.
    pub fn advance_level(&mut self) {
        self.level = self.level.saturating_add(1);
    }

    /// Record a failed round
    pub fn record_failure(&mut self) {
        self.lives = self.lives.saturating_sub(1);
    }

    /// Check whether the run is over
    pub fn out_of_lives(&self) -> bool {
        self.lives == 0
    }

    /// Drop back to level 1 (run over, before returning to idle)
    pub fn reset_level(&mut self) {
        self.level = 1;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
