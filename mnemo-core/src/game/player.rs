//! Sequence playback on the panel LEDs

use crate::config::Timings;
use crate::sequence::Symbol;
use crate::traits::panel::GamePanel;
use crate::traits::time::Timebase;

/// Replay a sequence visually, one LED at a time
///
/// Each symbol's LED is lit for `led_on_ms`, then an `inter_symbol_ms`
/// dark gap follows before the next symbol. Blocking; always completes
/// every symbol, including the gap after the last one.
pub fn play_sequence<P, T>(panel: &mut P, timer: &mut T, sequence: &[Symbol], timings: &Timings)
where
    P: GamePanel,
    T: Timebase,
{
    for &symbol in sequence {
        panel.set_led(symbol, true);
        timer.sleep_ms(timings.led_on_ms);
        panel.set_led(symbol, false);
        timer.sleep_ms(timings.inter_symbol_ms);
    }
}
