//! Chordclock Hardware Abstraction Layer
//!
//! This crate defines the driver interfaces the badge application consumes.
//! Board support crates implement them; the application in `chordclock-core`
//! only ever talks to these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (chordclock-core)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  chordclock-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Board drivers (LEDs, LCD, GPIO, ADC)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`], [`buttons::Buttons`] - Button inputs
//! - [`leds::LedStrip`] - Fixed-length RGB LED strip with dim channels
//! - [`display::Display`], [`display::Frame`] - Text display
//! - [`power::BatteryMonitor`] - Battery voltage sampling
//! - [`clock::Clock`] - Local wall-clock time

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod clock;
pub mod display;
pub mod gpio;
pub mod leds;
pub mod power;

// Re-export key traits at crate root for convenience
pub use buttons::{Button, Buttons, PinButtons};
pub use clock::{Clock, ClockError, DateTime};
pub use display::{Display, DisplayError, Font, Frame, SCREEN_WIDTH};
pub use gpio::{ActiveLevel, InputPin};
pub use leds::{Color, LedError, LedStrip, LED_COUNT};
pub use power::{BatteryMonitor, SensorError};
