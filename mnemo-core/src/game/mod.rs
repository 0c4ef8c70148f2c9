//! Game orchestration
//!
//! The [`Game`] object owns the panel, screen, timebase, and RNG and
//! drives them through the Idle/Running phase machine: generate a
//! sequence, replay it, match the player's presses, update lives and
//! level, and keep the display current.

pub mod matcher;
pub mod phase;
pub mod player;
pub mod session;

pub use matcher::{await_match, EdgeDetector, MatchOutcome};
pub use phase::{Phase, PhaseEvent};
pub use session::GameSession;

use crate::config::GameConfig;
use crate::sequence::{SequenceRng, Symbol};
use crate::text;
use crate::traits::console::{Command, CommandSource};
use crate::traits::panel::GamePanel;
use crate::traits::screen::{DisplayError, Line, TextScreen};
use crate::traits::time::Timebase;
use player::play_sequence;

/// The whole game: hardware handles, rules, and mutable session state
pub struct Game<P, S, T> {
    panel: P,
    screen: S,
    timer: T,
    rng: SequenceRng,
    config: GameConfig,
    session: GameSession,
    phase: Phase,
    prev_phase: Phase,
}

impl<P, S, T> Game<P, S, T>
where
    P: GamePanel,
    S: TextScreen,
    T: Timebase,
{
    /// Assemble a game in the Idle phase with no lives
    pub fn new(panel: P, screen: S, timer: T, rng: SequenceRng, config: GameConfig) -> Self {
        Self {
            panel,
            screen,
            timer,
            rng,
            config,
            session: GameSession::new(),
            phase: Phase::Idle,
            prev_phase: Phase::Idle,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current session state
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run until the console asks for exit
    ///
    /// Shows the idle prompt, then ticks forever: one phase tick, a
    /// short pause, one non-blocking console poll. On exit every symbol
    /// LED is forced low; the display bus itself is released when the
    /// caller drops the screen.
    pub fn run<C: CommandSource>(&mut self, console: &mut C) -> Result<(), DisplayError> {
        self.show_idle_prompt()?;
        loop {
            self.tick()?;
            self.timer.sleep_ms(self.config.timings.loop_pause_ms);
            if console.poll_command() == Some(Command::Exit) {
                break;
            }
        }
        self.panel.all_leds_off();
        Ok(())
    }

    /// One outer-loop tick of the current phase
    pub fn tick(&mut self) -> Result<(), DisplayError> {
        let phase = self.phase;
        match phase {
            Phase::Idle => self.idle_tick()?,
            Phase::Running => self.running_tick()?,
        }
        self.prev_phase = phase;
        Ok(())
    }

    fn idle_tick(&mut self) -> Result<(), DisplayError> {
        // Re-entry from a finished run: put the prompt back up
        if self.prev_phase.is_running() {
            self.show_idle_prompt()?;
        }

        let levels = self.panel.read_buttons();
        if levels.iter().any(|&level| level) {
            self.phase = self.phase.transition(PhaseEvent::AnyButton);
            self.screen.clear()?;
        }
        Ok(())
    }

    fn running_tick(&mut self) -> Result<(), DisplayError> {
        if self.prev_phase == Phase::Idle {
            self.session.start(&self.config);
            self.show_status()?;
        }

        let timings = self.config.timings;
        self.timer.sleep_ms(timings.round_lead_in_ms);

        let sequence = self.rng.generate(self.session.round_len());
        play_sequence(&mut self.panel, &mut self.timer, &sequence, &timings);

        // Level moves before the outcome is known; see
        // GameSession::advance_level
        self.session.advance_level();

        let outcome = await_match(&mut self.panel, &mut self.timer, &sequence, &timings);
        if outcome.is_success() {
            self.panel.set_success_lamp(true);
            self.timer.sleep_ms(timings.success_hold_ms);
            self.panel.set_success_lamp(false);
            self.screen.clear()?;
            self.show_status()?;
        } else {
            self.panel.set_fail_lamp(true);
            self.session.record_failure();

            self.screen.clear()?;
            self.screen.print_line(Line::Top, text::WRONG)?;
            self.screen
                .print_line(Line::Bottom, &text::lives_left_line(self.session.lives()))?;
            self.timer.sleep_ms(timings.fail_hold_ms);
            self.panel.set_fail_lamp(false);

            self.show_status()?;
            self.timer.sleep_ms(timings.status_hold_ms);

            if self.session.out_of_lives() {
                self.screen.clear()?;
                self.screen.print_line(Line::Top, text::YOU_LOSE)?;
                self.screen.print_line(
                    Line::Bottom,
                    &text::level_reached_line(self.session.level()),
                )?;
                self.timer.sleep_ms(timings.fail_hold_ms);
                self.session.reset_level();
                self.screen.clear()?;
                self.phase = self.phase.transition(PhaseEvent::OutOfLives);
            }
        }

        // Post-round visual feedback: mirror whatever is held right now
        let levels = self.panel.read_buttons();
        for (i, &level) in levels.iter().enumerate() {
            self.panel.set_led(Symbol::new(i), level);
        }
        Ok(())
    }

    fn show_idle_prompt(&mut self) -> Result<(), DisplayError> {
        self.screen.print_line(Line::Top, text::IDLE_TOP)?;
        self.screen.print_line(Line::Bottom, text::IDLE_BOTTOM)
    }

    fn show_status(&mut self) -> Result<(), DisplayError> {
        self.screen
            .print_line(Line::Top, &text::level_line(self.session.level()))?;
        self.screen
            .print_line(Line::Bottom, &text::lives_line(self.session.lives()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SYMBOL_COUNT;
    use heapless::{String, Vec};

    const SEED: u64 = 7;
    const R: [bool; 4] = [false; 4];

    fn press(index: usize) -> [bool; SYMBOL_COUNT] {
        let mut frame = [false; SYMBOL_COUNT];
        frame[index] = true;
        frame
    }

    /// Panel fed one scripted frame per read; records lamp pulses
    struct ScriptedPanel {
        frames: Vec<[bool; SYMBOL_COUNT], 32>,
        cursor: usize,
        leds: [bool; SYMBOL_COUNT],
        success_pulses: usize,
        fail_pulses: usize,
    }

    impl ScriptedPanel {
        fn new(frames: &[[bool; SYMBOL_COUNT]]) -> Self {
            Self {
                frames: Vec::from_slice(frames).unwrap(),
                cursor: 0,
                leds: [false; SYMBOL_COUNT],
                success_pulses: 0,
                fail_pulses: 0,
            }
        }
    }

    impl GamePanel for ScriptedPanel {
        fn set_led(&mut self, symbol: Symbol, on: bool) {
            self.leds[symbol.index()] = on;
        }

        fn read_buttons(&mut self) -> [bool; SYMBOL_COUNT] {
            let frame = self
                .frames
                .get(self.cursor)
                .copied()
                .unwrap_or([false; SYMBOL_COUNT]);
            self.cursor += 1;
            frame
        }

        fn set_success_lamp(&mut self, on: bool) {
            if on {
                self.success_pulses += 1;
            }
        }

        fn set_fail_lamp(&mut self, on: bool) {
            if on {
                self.fail_pulses += 1;
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ScreenOp {
        Clear,
        Print(Line, String<20>),
    }

    /// Screen that records every requested line as-is; cropping to the
    /// display width is the real screen's job, not the game's
    struct MockScreen {
        ops: Vec<ScreenOp, 64>,
    }

    impl MockScreen {
        fn new() -> Self {
            Self { ops: Vec::new() }
        }

        fn printed(&self, wanted: &str) -> bool {
            self.ops.iter().any(|op| match op {
                ScreenOp::Print(_, line) => line.as_str() == wanted,
                ScreenOp::Clear => false,
            })
        }
    }

    impl TextScreen for MockScreen {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.ops.push(ScreenOp::Clear).unwrap();
            Ok(())
        }

        fn print_line(&mut self, line: Line, to_show: &str) -> Result<(), DisplayError> {
            let mut buf = String::new();
            let _ = buf.push_str(to_show);
            self.ops.push(ScreenOp::Print(line, buf)).unwrap();
            Ok(())
        }
    }

    struct FakeTimer {
        elapsed_us: u64,
    }

    impl FakeTimer {
        fn new() -> Self {
            Self { elapsed_us: 0 }
        }
    }

    impl Timebase for FakeTimer {
        fn sleep_us(&mut self, us: u32) {
            self.elapsed_us += u64::from(us);
        }

        fn now_ms(&mut self) -> u64 {
            self.elapsed_us / 1_000
        }
    }

    /// Console that asks for exit after a fixed number of polls
    struct CountdownConsole {
        polls_left: usize,
    }

    impl CommandSource for CountdownConsole {
        fn poll_command(&mut self) -> Option<Command> {
            if self.polls_left == 0 {
                Some(Command::Exit)
            } else {
                self.polls_left -= 1;
                None
            }
        }
    }

    fn new_game(frames: &[[bool; SYMBOL_COUNT]], config: GameConfig) -> Game<ScriptedPanel, MockScreen, FakeTimer> {
        Game::new(
            ScriptedPanel::new(frames),
            MockScreen::new(),
            FakeTimer::new(),
            SequenceRng::seeded(SEED),
            config,
        )
    }

    /// First round's sequence for [`SEED`] (level 1 -> three symbols)
    fn first_round() -> crate::sequence::Sequence {
        SequenceRng::seeded(SEED).generate(3)
    }

    /// Frames that reproduce `sequence` press by press
    fn correct_presses(sequence: &[Symbol]) -> Vec<[bool; SYMBOL_COUNT], 32> {
        let mut frames = Vec::new();
        for symbol in sequence {
            frames.push(press(symbol.index())).unwrap();
            frames.push(R).unwrap();
        }
        frames
    }

    #[test]
    fn test_idle_until_button_pressed() {
        let mut game = new_game(&[R, R], GameConfig::default());
        game.tick().unwrap();
        game.tick().unwrap();
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.session().lives(), 0);
    }

    #[test]
    fn test_press_starts_run_with_full_lives() {
        let mut game = new_game(&[press(3)], GameConfig::default());
        game.tick().unwrap();
        assert_eq!(game.phase(), Phase::Running);
        // Display was cleared for the status screen
        assert_eq!(game.screen.ops.last(), Some(&ScreenOp::Clear));
        // Lives are granted on the next tick's entry action, not yet
        assert_eq!(game.session().lives(), 0);
    }

    #[test]
    fn test_successful_round_advances_level_keeps_lives() {
        let mut frames: Vec<[bool; SYMBOL_COUNT], 32> = Vec::new();
        frames.push(press(0)).unwrap(); // start the run
        frames.extend(correct_presses(&first_round()));

        let mut game = new_game(&frames, GameConfig::default());
        game.tick().unwrap(); // Idle -> Running
        game.tick().unwrap(); // one full round

        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.session().level(), 2);
        assert_eq!(game.session().lives(), 10);
        assert_eq!(game.panel.success_pulses, 1);
        assert_eq!(game.panel.fail_pulses, 0);
        assert!(game.screen.printed("Level: 1"));
        assert!(game.screen.printed("Level: 2"));
        assert!(game.screen.printed("Lives: 10"));
    }

    #[test]
    fn test_failed_round_still_advances_level() {
        let expected = first_round();
        let wrong = (expected[0].index() + 1) % SYMBOL_COUNT;
        let frames = [press(1), press(wrong)];

        let mut game = new_game(&frames, GameConfig::default());
        game.tick().unwrap();
        game.tick().unwrap();

        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.session().level(), 2);
        assert_eq!(game.session().lives(), 9);
        assert_eq!(game.panel.fail_pulses, 1);
        assert!(game.screen.printed("Wrong!"));
        assert!(game.screen.printed("Lives Left: 9"));
    }

    #[test]
    fn test_timeout_counts_as_failure() {
        // Start the run, then never press anything
        let mut game = new_game(&[press(2)], GameConfig::default());
        game.tick().unwrap();
        game.tick().unwrap();

        assert_eq!(game.session().lives(), 9);
        assert!(game.screen.printed("Wrong!"));
    }

    #[test]
    fn test_last_life_ends_the_run() {
        let expected = first_round();
        let wrong = (expected[0].index() + 1) % SYMBOL_COUNT;
        let frames = [press(0), press(wrong)];

        let config = GameConfig {
            starting_lives: 1,
            ..GameConfig::default()
        };
        let mut game = new_game(&frames, config);
        game.tick().unwrap();
        game.tick().unwrap();

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.session().lives(), 0);
        assert_eq!(game.session().level(), 1);
        assert!(game.screen.printed("You Lose!"));
        // Level had already advanced when the run ended
        assert!(game.screen.printed("Level Reached: 2"));

        // Next idle tick restores the prompt
        game.tick().unwrap();
        assert!(game.screen.printed(text::IDLE_TOP));
    }

    #[test]
    fn test_full_loss_reports_final_level() {
        // Start the run, then let every round time out: ten lives burn
        // through ten rounds, so the loss screen must carry the
        // two-digit level 11
        let mut game = new_game(&[press(0)], GameConfig::default());
        for _ in 0..11 {
            game.tick().unwrap();
        }

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.session().level(), 1);
        assert!(game.screen.printed("You Lose!"));
        assert!(game.screen.printed("Level Reached: 11"));
    }

    #[test]
    fn test_run_exits_on_console_command() {
        let mut game = new_game(&[], GameConfig::default());
        let mut console = CountdownConsole { polls_left: 3 };
        game.run(&mut console).unwrap();

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.panel.leds, [false; SYMBOL_COUNT]);
        assert!(game.screen.printed(text::IDLE_TOP));
        assert!(game.screen.printed(text::IDLE_BOTTOM));
    }
}
