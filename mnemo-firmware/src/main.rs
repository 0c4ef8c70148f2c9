//! Mnemo - Memory Sequence Game Firmware
//!
//! Main firmware binary for RP2040-based memory game boards. Plays a
//! growing light sequence on four LEDs and scores the player's attempt
//! to repeat it on the matching buttons.
//!
//! Named after the Greek "mneme" meaning "memory".
//!
//! The whole game is one logical thread: the executor runs a single
//! task and every wait inside it is a blocking delay.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Instant;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use mnemo_core::config::GameConfig;
use mnemo_core::game::Game;
use mnemo_core::sequence::SequenceRng;
use mnemo_core::traits::screen::Line;
use mnemo_drivers::{GpioPanel, Lcd1602, LcdConfig};
use mnemo_hal_rp2040::{BlockingI2c, GpioInput, GpioOutput, SystemTimer, UartConsole};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Mnemo firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Console UART on the standard Pico pins
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();
    let mut console = UartConsole::new(rx);
    info!("Console UART initialized");

    // Panel wiring: symbol LEDs on GPIO6-9, their buttons on GPIO10-13
    // (active high, pulled down), success lamp GPIO14, fail lamp GPIO15
    let leds = [
        GpioOutput::new(p.PIN_6.into()),
        GpioOutput::new(p.PIN_7.into()),
        GpioOutput::new(p.PIN_8.into()),
        GpioOutput::new(p.PIN_9.into()),
    ];
    let buttons = [
        GpioInput::new(p.PIN_10.into(), Pull::Down),
        GpioInput::new(p.PIN_11.into(), Pull::Down),
        GpioInput::new(p.PIN_12.into(), Pull::Down),
        GpioInput::new(p.PIN_13.into(), Pull::Down),
    ];
    let success_lamp = GpioOutput::new(p.PIN_14.into());
    let fail_lamp = GpioOutput::new(p.PIN_15.into());
    let panel = GpioPanel::new(leds, buttons, success_lamp, fail_lamp);
    info!("Panel GPIO initialized");

    // Display backpack on I2C0: SDA GPIO4, SCL GPIO5
    let i2c = I2c::new_blocking(
        p.I2C0,
        p.PIN_5,
        p.PIN_4,
        embassy_rp::i2c::Config::default(),
    );
    let mut lcd = Lcd1602::new(BlockingI2c::new(i2c), SystemTimer::new(), LcdConfig::default());
    unwrap!(lcd.init());
    lcd.set_backlight(true);
    unwrap!(lcd.marquee("Welcome to Mnemo!", Line::Top, 150, 1));
    info!("Display initialized");

    // The timer tick count at boot varies with flash and probe timing
    // enough to serve as the round seed
    let seed = Instant::now().as_ticks();
    let rng = SequenceRng::seeded(seed);

    let mut game = Game::new(panel, lcd, SystemTimer::new(), rng, GameConfig::default());
    info!("Game loop running");

    match game.run(&mut console) {
        Ok(()) => info!("Game loop exited on console command"),
        Err(e) => error!("Display failure, game stopped: {}", e),
    }

    // Nothing left to do; sleep forever
    loop {
        embassy_time::Timer::after_secs(60).await;
    }
}
