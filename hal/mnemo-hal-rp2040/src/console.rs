//! Console command source on a buffered UART
//!
//! Drains whatever bytes the UART has buffered without blocking and
//! feeds them through the line parser. Read errors (breaks, framing)
//! drop the pending bytes and are otherwise ignored.

use embedded_io::{Read, ReadReady};
use mnemo_core::command::CommandParser;
use mnemo_core::traits::console::{Command, CommandSource};

/// Command source over any ready-aware byte stream
pub struct UartConsole<R> {
    reader: R,
    parser: CommandParser,
}

impl<R> UartConsole<R>
where
    R: Read + ReadReady,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            parser: CommandParser::new(),
        }
    }
}

impl<R> CommandSource for UartConsole<R>
where
    R: Read + ReadReady,
{
    fn poll_command(&mut self) -> Option<Command> {
        let mut command = None;
        let mut buf = [0u8; 16];
        while self.reader.read_ready().unwrap_or(false) {
            let n = match self.reader.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            for &byte in &buf[..n] {
                if let Some(parsed) = self.parser.push(byte) {
                    command = Some(parsed);
                }
            }
        }
        command
    }
}
