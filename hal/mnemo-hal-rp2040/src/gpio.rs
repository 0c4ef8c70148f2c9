//! GPIO pin wrappers for RP2040
//!
//! Thin adapters from embassy-rp pin drivers to the shared `mnemo-hal`
//! pin traits.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use mnemo_hal::{InputPin, OutputPin};

/// Push-pull output pin
pub struct GpioOutput {
    pin: Output<'static>,
}

impl GpioOutput {
    /// Configure a pin as an output, initially low
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for GpioOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Input pin with a configurable pull
pub struct GpioInput {
    pin: Input<'static>,
}

impl GpioInput {
    /// Configure a pin as an input with the given pull
    pub fn new(pin: Peri<'static, AnyPin>, pull: Pull) -> Self {
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl InputPin for GpioInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
