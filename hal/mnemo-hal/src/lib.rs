//! Mnemo Hardware Abstraction Layer
//!
//! This crate defines the two narrow hardware capabilities the game core
//! needs, as traits that chip-specific HALs implement:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Game / drivers (mnemo-core, -drivers)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mnemo-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mnemo-hal-rp2040 (embassy-rp impls)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O (LEDs, buttons)
//! - [`i2c::I2cBus`] - I2C bus operations (display backpack)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use i2c::I2cBus;
