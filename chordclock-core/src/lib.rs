//! Board-agnostic core logic for the badge clock face
//!
//! This crate contains the foreground loop and everything it composes,
//! written against the traits in `chordclock-hal`:
//!
//! - Chord detection on the two bottom buttons
//! - Flashlight mode on the LED strip
//! - Clock face rendering (battery bar, time, date)
//! - Range mapping for the battery gauge
//! - The loop state machine and its controller

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod flashlight;
pub mod input;
pub mod range;
pub mod render;
pub mod state;

#[cfg(test)]
mod mock;

pub use controller::Controller;
pub use error::Fault;
pub use range::map_range;
