//! HD44780 16x2 character LCD behind a PCF8574 I2C backpack
//!
//! The backpack exposes the LCD's 4-bit parallel interface through a
//! single I/O-expander byte: P0 = RS, P1 = RW, P2 = E (enable latch),
//! P3 = backlight, P4..P7 = data nibble. Every 8-bit command or
//! character therefore goes out as two nibbles, and each nibble takes
//! three bus writes: the data itself, data with E set, data with E
//! cleared, with timed holds around the enable pulse.
//!
//! Text is assumed to be ASCII; bytes are sent to the character ROM
//! as-is.

use mnemo_core::traits::screen::{DisplayError, Line, TextScreen, LINE_LEN};
use mnemo_core::traits::time::Timebase;
use mnemo_hal::I2cBus;

// PCF8574 bit assignments
const BACKLIGHT: u8 = 0x08;
const ENABLE: u8 = 0b0000_0100;
const RS_DATA: u8 = 0x01;
const RS_COMMAND: u8 = 0x00;

// DDRAM addresses of the two lines
const LINE_1_ADDR: u8 = 0x80;
const LINE_2_ADDR: u8 = 0xC0;

// Clear-display command
const CMD_CLEAR: u8 = 0x01;

/// Whether a byte goes to the instruction or the data register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteMode {
    /// Instruction register (RS low)
    Command,
    /// Data register / character ROM (RS high)
    Data,
}

/// Bus address and enable-latch timing
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdConfig {
    /// 7-bit I2C address of the PCF8574 backpack (0x27 or 0x3F)
    pub address: u8,
    /// Enable pulse width in microseconds
    pub pulse_us: u32,
    /// Hold before and after the pulse in microseconds
    pub settle_us: u32,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: 0x27,
            pulse_us: 500,
            settle_us: 500,
        }
    }
}

/// HD44780 driver over any [`I2cBus`]
///
/// [`init`](Lcd1602::init) must be called exactly once before any other
/// operation. The backlight starts off; the bus is released by dropping
/// the driver.
pub struct Lcd1602<B, T> {
    bus: B,
    timer: T,
    config: LcdConfig,
    backlight: u8,
}

impl<B, T> Lcd1602<B, T>
where
    B: I2cBus,
    T: Timebase,
{
    /// Create an uninitialized driver
    pub fn new(bus: B, timer: T, config: LcdConfig) -> Self {
        Self {
            bus,
            timer,
            config,
            backlight: 0,
        }
    }

    /// Run the fixed initialization command sequence
    ///
    /// 4-bit mode select (0x33, 0x32), cursor direction (0x06), display
    /// on / cursor off (0x0C), 2 lines / 5x8 font (0x28), clear, then a
    /// settle delay.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        for &command in &[0x33, 0x32, 0x06, 0x0C, 0x28, CMD_CLEAR] {
            self.write_byte(command, ByteMode::Command)?;
        }
        self.timer.sleep_us(self.config.settle_us);
        Ok(())
    }

    /// Switch the backlight bit OR-ed into every subsequent write
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight = if on { BACKLIGHT } else { 0 };
    }

    /// Send one byte as two latched nibbles
    pub fn write_byte(&mut self, byte: u8, mode: ByteMode) -> Result<(), DisplayError> {
        let rs = match mode {
            ByteMode::Command => RS_COMMAND,
            ByteMode::Data => RS_DATA,
        };
        let high = rs | (byte & 0xF0) | self.backlight;
        let low = rs | ((byte << 4) & 0xF0) | self.backlight;
        self.write_nibble(high)?;
        self.write_nibble(low)
    }

    /// Scroll `text` across one line as a 16-character sliding window
    ///
    /// The window slides one character per `step_delay_ms` over the
    /// text followed by 16 trailing spaces, wrapping circularly, for
    /// `cycles` full traversals. Purely cosmetic; blocks for its full
    /// duration.
    pub fn marquee(
        &mut self,
        text: &str,
        line: Line,
        step_delay_ms: u32,
        cycles: usize,
    ) -> Result<(), DisplayError> {
        let bytes = text.as_bytes();
        let span = bytes.len() + LINE_LEN;
        for _ in 0..cycles {
            for pos in 0..span {
                let mut window = [b' '; LINE_LEN];
                for (i, cell) in window.iter_mut().enumerate() {
                    let index = (pos + i) % span;
                    if index < bytes.len() {
                        *cell = bytes[index];
                    }
                }
                self.write_line_cells(line, &window)?;
                self.timer.sleep_ms(step_delay_ms);
            }
        }
        Ok(())
    }

    fn write_line_cells(&mut self, line: Line, cells: &[u8; LINE_LEN]) -> Result<(), DisplayError> {
        let address = match line {
            Line::Top => LINE_1_ADDR,
            Line::Bottom => LINE_2_ADDR,
        };
        self.write_byte(address, ByteMode::Command)?;
        for &cell in cells {
            self.write_byte(cell, ByteMode::Data)?;
        }
        Ok(())
    }

    fn write_nibble(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.bus_write(bits)?;
        // Latch the nibble: hold, enable high, pulse, enable low, hold
        self.timer.sleep_us(self.config.settle_us);
        self.bus_write(bits | ENABLE)?;
        self.timer.sleep_us(self.config.pulse_us);
        self.bus_write(bits & !ENABLE)?;
        self.timer.sleep_us(self.config.settle_us);
        Ok(())
    }

    fn bus_write(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.bus
            .write(self.config.address, &[byte])
            .map_err(|_| DisplayError::Bus)
    }
}

impl<B, T> TextScreen for Lcd1602<B, T>
where
    B: I2cBus,
    T: Timebase,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.write_byte(CMD_CLEAR, ByteMode::Command)
    }

    fn print_line(&mut self, line: Line, text: &str) -> Result<(), DisplayError> {
        let bytes = text.as_bytes();
        let mut cells = [b' '; LINE_LEN];
        for (i, cell) in cells.iter_mut().enumerate() {
            if let Some(&ch) = bytes.get(i) {
                *cell = ch;
            }
        }
        self.write_line_cells(line, &cells)
    }
}
