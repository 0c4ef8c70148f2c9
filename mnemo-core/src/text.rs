//! Display text formatting
//!
//! All player-visible text lives here. Formatted lines may run past the
//! display width; the screen truncates to its 16 cells on write, so the
//! buffer here is sized for the longest possible line instead of the
//! display.

use core::fmt::{Arguments, Write};

use heapless::String;

/// Idle prompt, top line
pub const IDLE_TOP: &str = "Press Any Button";
/// Idle prompt, bottom line
pub const IDLE_BOTTOM: &str = "    To Begin!";
/// Shown on a failed round
pub const WRONG: &str = "Wrong!";
/// Shown when the last life is lost
pub const YOU_LOSE: &str = "You Lose!";

/// Buffer wide enough for the longest status line
///
/// "Level Reached: " plus the widest `u16` is 20 characters.
pub type LineBuf = String<20>;

/// Single formatting path for every status line
///
/// The buffer capacity covers the widest value each line can carry, so
/// the write cannot fail.
fn format_line(args: Arguments<'_>) -> LineBuf {
    let mut line = LineBuf::new();
    let _ = line.write_fmt(args);
    line
}

/// "Level: L"
pub fn level_line(level: u16) -> LineBuf {
    format_line(format_args!("Level: {}", level))
}

/// "Lives: N"
pub fn lives_line(lives: u8) -> LineBuf {
    format_line(format_args!("Lives: {}", lives))
}

/// "Lives Left: N"
pub fn lives_left_line(lives: u8) -> LineBuf {
    format_line(format_args!("Lives Left: {}", lives))
}

/// "Level Reached: L"
pub fn level_reached_line(level: u16) -> LineBuf {
    format_line(format_args!("Level Reached: {}", level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::screen::LINE_LEN;

    #[test]
    fn test_status_lines() {
        assert_eq!(level_line(1).as_str(), "Level: 1");
        assert_eq!(lives_line(10).as_str(), "Lives: 10");
        assert_eq!(lives_left_line(9).as_str(), "Lives Left: 9");
        assert_eq!(level_reached_line(3).as_str(), "Level Reached: 3");
    }

    #[test]
    fn test_two_digit_level_reached_keeps_its_number() {
        // With ten lives a loss always lands past level ten; the number
        // must survive formatting even though the screen crops the line
        assert_eq!(level_reached_line(11).as_str(), "Level Reached: 11");
        assert_eq!(
            level_reached_line(u16::MAX).as_str(),
            "Level Reached: 65535"
        );
    }

    #[test]
    fn test_widest_lines_fit_the_buffer() {
        assert_eq!(level_reached_line(u16::MAX).len(), 20);
        assert_eq!(lives_left_line(u8::MAX).as_str(), "Lives Left: 255");
    }

    #[test]
    fn test_prompt_fits_display() {
        assert!(IDLE_TOP.len() <= LINE_LEN);
        assert!(IDLE_BOTTOM.len() <= LINE_LEN);
    }
}
