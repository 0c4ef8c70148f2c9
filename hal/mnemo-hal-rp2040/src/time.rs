//! Timebase on the RP2040 hardware timer
//!
//! The game model is fully blocking, so delays are busy blocks on the
//! embassy time driver rather than awaited timers.

use embassy_time::{block_for, Duration, Instant};
use mnemo_core::traits::time::Timebase;

/// Timebase backed by the chip's monotonic timer
///
/// Stateless; copies are interchangeable.
#[derive(Clone, Copy, Default)]
pub struct SystemTimer;

impl SystemTimer {
    pub fn new() -> Self {
        Self
    }
}

impl Timebase for SystemTimer {
    fn sleep_us(&mut self, us: u32) {
        block_for(Duration::from_micros(u64::from(us)));
    }

    fn now_ms(&mut self) -> u64 {
        Instant::now().as_millis()
    }
}
