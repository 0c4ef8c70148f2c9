//! GPIO pin abstractions
//!
//! Traits for the digital input and output pins the game uses (symbol
//! LEDs, status lamps, buttons), implemented by chip-specific HALs.

/// Digital output pin
///
/// Implementations handle the actual hardware register manipulation for
/// the specific chip.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Implementations handle the actual hardware register reading for the
/// specific chip. Reads are infallible at this layer; a transport that
/// can fail to read must report an unreadable pin as low rather than
/// aborting the caller.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
