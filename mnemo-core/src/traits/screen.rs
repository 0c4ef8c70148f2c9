//! Text screen trait for the two-line character display

/// Characters per display line
pub const LINE_LEN: usize = 16;

/// One of the two display lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Top line
    Top,
    /// Bottom line
    Bottom,
}

/// Errors that can occur when talking to the display
///
/// Display failures are not recoverable for the game; they propagate to
/// the top of the loop where the firmware logs and stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Underlying bus write failed
    Bus,
}

/// Trait for the two-line character display
///
/// A line write always fills all [`LINE_LEN`] cells: shorter text is
/// space-padded, longer text is silently truncated.
pub trait TextScreen {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Print text on one line, padded/truncated to exactly [`LINE_LEN`]
    fn print_line(&mut self, line: Line, text: &str) -> Result<(), DisplayError>;
}
