//! Board-agnostic core logic for the Mnemo memory game
//!
//! This crate contains all game logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction traits (panel, screen, timebase, console)
//! - Game session and phase state machine
//! - Pseudo-random sequence generation
//! - Sequence playback and input matching
//! - Display text formatting
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod game;
pub mod sequence;
pub mod text;
pub mod traits;
