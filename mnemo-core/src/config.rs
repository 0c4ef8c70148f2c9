//! Configuration type definitions
//!
//! All tunables live in explicit context objects handed to the game at
//! construction time. Tests substitute their own values; the firmware
//! uses the defaults.

/// Timing constants for the game loop, in milliseconds unless noted
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timings {
    /// How long each symbol LED stays lit during playback
    pub led_on_ms: u32,
    /// Gap between symbols during playback
    pub inter_symbol_ms: u32,
    /// Button poll cadence inside the input matcher
    pub poll_ms: u32,
    /// Inactivity window before the matcher gives up
    pub input_timeout_ms: u64,
    /// Pause before each round's playback begins
    pub round_lead_in_ms: u32,
    /// How long the success lamp stays lit
    pub success_hold_ms: u32,
    /// How long the "Wrong!" screen (and fail lamp) is shown
    pub fail_hold_ms: u32,
    /// Hold after the status redraw that follows a failure
    pub status_hold_ms: u32,
    /// Sleep at the end of every outer loop iteration
    pub loop_pause_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            led_on_ms: 500,
            inter_symbol_ms: 100,
            poll_ms: 10,
            input_timeout_ms: 5_000,
            round_lead_in_ms: 500,
            success_hold_ms: 2_000,
            fail_hold_ms: 1_500,
            status_hold_ms: 1_000,
            loop_pause_ms: 50,
        }
    }
}

/// Game rules configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    /// Lives granted on every Idle -> Running transition
    pub starting_lives: u8,
    /// Timing constants
    pub timings: Timings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: 10,
            timings: Timings::default(),
        }
    }
}
