//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in mnemo-core, built
//! on the mnemo-hal pin and bus abstractions:
//!
//! - HD44780 character LCD behind a PCF8574 I2C backpack
//! - LED/button game panel on plain GPIO pins

#![no_std]
#![deny(unsafe_code)]

pub mod lcd1602;
pub mod panel;

pub use lcd1602::{Lcd1602, LcdConfig};
pub use panel::GpioPanel;
