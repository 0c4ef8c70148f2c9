//! Input matching - read presses back and compare against a sequence

use crate::config::Timings;
use crate::sequence::{Symbol, SYMBOL_COUNT};
use crate::traits::panel::GamePanel;
use crate::traits::time::Timebase;

/// Result of matching player input against a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatchOutcome {
    /// Every symbol was pressed, in order
    Matched,
    /// A wrong button was pressed
    Mismatch,
    /// No press within the inactivity window
    TimedOut,
}

impl MatchOutcome {
    /// The game treats anything but a full match as failure
    pub fn is_success(self) -> bool {
        matches!(self, MatchOutcome::Matched)
    }
}

/// Per-button previous-level flags for rising edge detection
///
/// Fresh for every `await_match` invocation.
pub struct EdgeDetector {
    prev: [bool; SYMBOL_COUNT],
}

impl EdgeDetector {
    /// All buttons assumed released
    pub fn new() -> Self {
        Self {
            prev: [false; SYMBOL_COUNT],
        }
    }

    /// Feed one poll's button levels; returns the accepted rising edge
    ///
    /// At most one edge is accepted per poll. When several buttons rise
    /// in the same poll, the first in panel order wins.
    pub fn rising_edge(&mut self, levels: [bool; SYMBOL_COUNT]) -> Option<Symbol> {
        let mut pressed = None;
        for (i, &level) in levels.iter().enumerate() {
            if level && !self.prev[i] && pressed.is_none() {
                pressed = Some(Symbol::new(i));
            }
            self.prev[i] = level;
        }
        pressed
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Block until the player has either reproduced `sequence` or failed
///
/// Polls the buttons every `poll_ms`, mirroring each button's level
/// onto its LED for visual feedback. A correct press advances the
/// cursor; a wrong press fails immediately with no partial credit;
/// `input_timeout_ms` without an accepted press (measured from entry or
/// from the last accepted press) fails with [`MatchOutcome::TimedOut`].
/// An empty sequence matches immediately.
pub fn await_match<P, T>(
    panel: &mut P,
    timer: &mut T,
    sequence: &[Symbol],
    timings: &Timings,
) -> MatchOutcome
where
    P: GamePanel,
    T: Timebase,
{
    let mut edges = EdgeDetector::new();
    let mut cursor = 0usize;
    let mut last_input = timer.now_ms();

    while cursor < sequence.len() {
        if timer.now_ms().saturating_sub(last_input) > timings.input_timeout_ms {
            return MatchOutcome::TimedOut;
        }

        let levels = panel.read_buttons();
        for (i, &level) in levels.iter().enumerate() {
            panel.set_led(Symbol::new(i), level);
        }

        if let Some(symbol) = edges.rising_edge(levels) {
            last_input = timer.now_ms();
            if symbol == sequence[cursor] {
                cursor += 1;
            } else {
                return MatchOutcome::Mismatch;
            }
        }

        timer.sleep_ms(timings.poll_ms);
    }

    MatchOutcome::Matched
}
