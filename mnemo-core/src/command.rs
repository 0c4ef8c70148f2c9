//! Console command line parser
//!
//! Accumulates bytes from whatever transport the firmware wires up
//! (buffered UART on the RP2040) and recognizes complete command lines.
//! Kept transport-free so it can be tested on the host.

use heapless::String;

use crate::traits::console::Command;

/// Longest command line worth keeping
const MAX_LINE: usize = 16;

/// Byte-at-a-time command line accumulator
///
/// A line is terminated by `\r` or `\n`. Lines that overflow the buffer
/// or match no known command are discarded silently; garbage on the
/// console must never disturb the game.
#[derive(Default)]
pub struct CommandParser {
    line: String<MAX_LINE>,
    overflowed: bool,
}

impl CommandParser {
    /// Create an empty parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte; returns a command when a line completes as one
    pub fn push(&mut self, byte: u8) -> Option<Command> {
        match byte {
            b'\r' | b'\n' => {
                let command = if self.overflowed {
                    None
                } else {
                    parse_line(self.line.as_str())
                };
                self.line.clear();
                self.overflowed = false;
                command
            }
            _ => {
                if self.line.push(byte as char).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }
}

fn parse_line(line: &str) -> Option<Command> {
    match line.trim() {
        "exit" => Some(Command::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(parser: &mut CommandParser, bytes: &[u8]) -> Option<Command> {
        let mut result = None;
        for &byte in bytes {
            if let Some(command) = parser.push(byte) {
                result = Some(command);
            }
        }
        result
    }

    #[test]
    fn test_exit_command() {
        let mut parser = CommandParser::new();
        assert_eq!(feed(&mut parser, b"exit\n"), Some(Command::Exit));
    }

    #[test]
    fn test_crlf_and_whitespace() {
        let mut parser = CommandParser::new();
        assert_eq!(feed(&mut parser, b"  exit \r\n"), Some(Command::Exit));
    }

    #[test]
    fn test_unknown_line_ignored() {
        let mut parser = CommandParser::new();
        assert_eq!(feed(&mut parser, b"help\n"), None);
        // Parser state is clean for the next line
        assert_eq!(feed(&mut parser, b"exit\n"), Some(Command::Exit));
    }

    #[test]
    fn test_overflowing_line_discarded() {
        let mut parser = CommandParser::new();
        assert_eq!(
            feed(&mut parser, b"this line is far too long to keep exit\n"),
            None
        );
        assert_eq!(feed(&mut parser, b"exit\n"), Some(Command::Exit));
    }

    #[test]
    fn test_incomplete_line_pends() {
        let mut parser = CommandParser::new();
        assert_eq!(feed(&mut parser, b"exi"), None);
        assert_eq!(feed(&mut parser, b"t\n"), Some(Command::Exit));
    }
}
