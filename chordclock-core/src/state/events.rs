//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Input events
    /// Sample taken, both buttons not held
    NoChord,
    /// Sample taken, both buttons held
    Chord,
    /// Held chord let go after the flashlight was toggled
    Released,

    // Render events
    /// Frame flipped to the screen
    FrameCommitted,
    /// Frame abandoned because a peripheral failed
    FrameFailed,

    // Lifecycle events
    /// Host asked the loop to stop
    Shutdown,
}
