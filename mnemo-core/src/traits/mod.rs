//! Hardware abstraction traits the game logic is written against
//!
//! Concrete implementations live in `mnemo-drivers` (panel, screen) and
//! `mnemo-hal-rp2040` (timebase, console).

pub mod console;
pub mod panel;
pub mod screen;
pub mod time;

pub use console::{Command, CommandSource};
pub use panel::GamePanel;
pub use screen::{DisplayError, Line, TextScreen};
pub use time::Timebase;
