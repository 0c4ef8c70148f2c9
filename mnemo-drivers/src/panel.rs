//! GPIO-backed game panel
//!
//! Maps the [`GamePanel`] trait onto plain digital pins: one output per
//! symbol LED, one input per button (wired one-to-one with the LEDs),
//! plus the two status lamps.

use mnemo_core::sequence::{Symbol, SYMBOL_COUNT};
use mnemo_core::traits::panel::GamePanel;
use mnemo_hal::{InputPin, OutputPin};

/// Game panel on discrete GPIO pins
///
/// Index `i` of `leds` and `buttons` is symbol `i`; the wiring must
/// keep the pairs aligned.
pub struct GpioPanel<O, I> {
    leds: [O; SYMBOL_COUNT],
    buttons: [I; SYMBOL_COUNT],
    success_lamp: O,
    fail_lamp: O,
}

impl<O, I> GpioPanel<O, I>
where
    O: OutputPin,
    I: InputPin,
{
    pub fn new(
        leds: [O; SYMBOL_COUNT],
        buttons: [I; SYMBOL_COUNT],
        success_lamp: O,
        fail_lamp: O,
    ) -> Self {
        Self {
            leds,
            buttons,
            success_lamp,
            fail_lamp,
        }
    }
}

impl<O, I> GamePanel for GpioPanel<O, I>
where
    O: OutputPin,
    I: InputPin,
{
    fn set_led(&mut self, symbol: Symbol, on: bool) {
        self.leds[symbol.index()].set_state(on);
    }

    fn read_buttons(&mut self) -> [bool; SYMBOL_COUNT] {
        core::array::from_fn(|i| self.buttons[i].is_high())
    }

    fn set_success_lamp(&mut self, on: bool) {
        self.success_lamp.set_state(on);
    }

    fn set_fail_lamp(&mut self, on: bool) {
        self.fail_lamp.set_state(on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[derive(Default)]
    struct MockOutput {
        high: bool,
    }

    impl OutputPin for MockOutput {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockInput<'a> {
        level: &'a Cell<bool>,
    }

    impl InputPin for MockInput<'_> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    fn panel(levels: &[Cell<bool>; 4]) -> GpioPanel<MockOutput, MockInput<'_>> {
        GpioPanel::new(
            core::array::from_fn(|_| MockOutput::default()),
            core::array::from_fn(|i| MockInput { level: &levels[i] }),
            MockOutput::default(),
            MockOutput::default(),
        )
    }

    fn levels() -> [Cell<bool>; 4] {
        core::array::from_fn(|_| Cell::new(false))
    }

    #[test]
    fn test_set_led_drives_matching_pin() {
        let levels = levels();
        let mut panel = panel(&levels);

        panel.set_led(Symbol::new(2), true);
        assert!(panel.leds[2].is_set_high());
        assert!(panel.leds[0].is_set_low());

        panel.set_led(Symbol::new(2), false);
        assert!(panel.leds[2].is_set_low());
    }

    #[test]
    fn test_read_buttons_reports_pin_levels_in_order() {
        let levels = levels();
        let mut panel = panel(&levels);

        assert_eq!(panel.read_buttons(), [false; 4]);

        levels[1].set(true);
        levels[3].set(true);
        assert_eq!(panel.read_buttons(), [false, true, false, true]);
    }

    #[test]
    fn test_status_lamps_are_independent() {
        let levels = levels();
        let mut panel = panel(&levels);

        panel.set_success_lamp(true);
        assert!(panel.success_lamp.is_set_high());
        assert!(panel.fail_lamp.is_set_low());

        panel.set_fail_lamp(true);
        panel.set_success_lamp(false);
        assert!(panel.fail_lamp.is_set_high());
        assert!(panel.success_lamp.is_set_low());
    }

    #[test]
    fn test_all_leds_off_clears_every_symbol() {
        let levels = levels();
        let mut panel = panel(&levels);

        for symbol in Symbol::all() {
            panel.set_led(symbol, true);
        }
        panel.all_leds_off();
        for led in &panel.leds {
            assert!(led.is_set_low());
        }
    }
}
