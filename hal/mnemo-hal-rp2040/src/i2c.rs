//! Blocking I2C master for RP2040
//!
//! Adapts an embassy-rp I2C peripheral in blocking mode to the shared
//! `mnemo-hal` bus trait. The display backpack is the only device on
//! the bus and standard mode (100 kHz) is plenty for it.

use embassy_rp::i2c::{Blocking, Error, I2c, Instance};
use mnemo_hal::I2cBus;

/// Blocking I2C bus master
pub struct BlockingI2c<'d, T: Instance> {
    bus: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> BlockingI2c<'d, T> {
    /// Wrap an already-configured blocking I2C peripheral
    pub fn new(bus: I2c<'d, T, Blocking>) -> Self {
        Self { bus }
    }
}

impl<T: Instance> I2cBus for BlockingI2c<'_, T> {
    type Error = Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Error> {
        self.bus.blocking_write(address as u16, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Error> {
        self.bus.blocking_read(address as u16, buf)
    }
}
