//! Button input handling
//!
//! Chord detection on the two bottom buttons.

pub mod monitor;

pub use monitor::{ButtonSample, InputMonitor};
