//! Blocking timebase trait
//!
//! There is exactly one logical thread of control; every wait in the
//! game is a real blocking delay through this trait. Tests substitute a
//! virtual clock so timeout behavior is checked without wall time.

/// Blocking delays plus a monotonic millisecond clock
pub trait Timebase {
    /// Block for the given number of microseconds
    fn sleep_us(&mut self, us: u32);

    /// Block for the given number of milliseconds
    fn sleep_ms(&mut self, ms: u32) {
        self.sleep_us(ms.saturating_mul(1_000));
    }

    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&mut self) -> u64;
}
