//! Game panel trait - the four LED/button pairs plus the status lamps

use crate::sequence::{Symbol, SYMBOL_COUNT};

/// The physical game panel
///
/// Four symbol LEDs, four buttons wired one-to-one with the LEDs, and
/// two dedicated status lamps. Button reads are level reads; edge
/// detection is the matcher's job. An unreadable button must be
/// reported as released (low), never as an error.
pub trait GamePanel {
    /// Drive one symbol LED
    fn set_led(&mut self, symbol: Symbol, on: bool);

    /// Read the current level of all four buttons, in panel order
    fn read_buttons(&mut self) -> [bool; SYMBOL_COUNT];

    /// Drive the success lamp
    fn set_success_lamp(&mut self, on: bool);

    /// Drive the fail lamp
    fn set_fail_lamp(&mut self, on: bool);

    /// Force every symbol LED low
    fn all_leds_off(&mut self) {
        for symbol in Symbol::all() {
            self.set_led(symbol, false);
        }
    }
}
