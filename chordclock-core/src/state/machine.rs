//! State machine definition
//!
//! One loop iteration is Idle -> (ChordDetected ->) Rendering -> Idle.
//! Stopped is only reachable through [`Event::Shutdown`]; bare-metal
//! builds never send it.

use super::events::Event;

/// Loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Waiting to sample the buttons
    #[default]
    Idle,
    /// Chord seen; flashlight toggles, then blocks until release
    ChordDetected,
    /// Drawing the clock face
    Rendering,
    /// Loop has been shut down
    Stopped,
}

impl State {
    /// Check if the loop is still live
    pub fn is_running(&self) -> bool {
        !matches!(self, State::Stopped)
    }

    /// Check if this state ends an iteration
    pub fn is_iteration_boundary(&self) -> bool {
        matches!(self, State::Idle | State::Stopped)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Shutdown from any live state
            (Stopped, _) => Stopped,
            (_, Shutdown) => Stopped,

            // Idle transitions
            (Idle, Chord) => ChordDetected,
            (Idle, NoChord) => Rendering,

            // ChordDetected transitions
            (ChordDetected, Released) => Rendering,

            // Rendering transitions
            (Rendering, FrameCommitted) => Idle,
            (Rendering, FrameFailed) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
