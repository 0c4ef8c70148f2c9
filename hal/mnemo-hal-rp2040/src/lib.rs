//! RP2040-specific HAL for the memory game firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `mnemo-hal` traits:
//!
//! - GPIO output and input wrappers for the panel pins
//! - Blocking I2C master for the display backpack
//! - Timebase on the hardware timer
//! - Console command source on a buffered UART

#![no_std]

pub mod console;
pub mod gpio;
pub mod i2c;
pub mod time;

pub use console::UartConsole;
pub use gpio::{GpioInput, GpioOutput};
pub use i2c::BlockingI2c;
pub use time::SystemTimer;
