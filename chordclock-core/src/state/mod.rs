//! Loop state machine
//!
//! Defines the foreground loop as an explicit, finite, deterministic
//! state machine.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
