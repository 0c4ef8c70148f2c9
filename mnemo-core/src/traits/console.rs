//! Out-of-band console command source
//!
//! The game checks for an operator command once per outer loop tick.
//! Polling must never block; no pending input is the normal case.

/// Commands the console can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Terminate the game loop
    Exit,
}

/// Non-blocking source of console commands
pub trait CommandSource {
    /// Poll for a complete command; `None` when nothing is pending
    fn poll_command(&mut self) -> Option<Command>;
}
