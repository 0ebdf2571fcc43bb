//! Chord monitor
//!
//! A chord is both bottom buttons held in the same sample. Debouncing is
//! edge-by-blocking: once a chord is seen the caller waits in
//! [`InputMonitor::wait_for_release`] until either button lets go, so a
//! single physical press toggles exactly once. There is no release
//! interrupt on this hardware, so the wait busy-polls at a fixed quantum.
//! A button held forever keeps the loop here for as long as it is held.

use chordclock_hal::{Button, Buttons};
use embedded_hal::delay::DelayNs;

/// Both button levels taken in one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    pub left: bool,
    pub right: bool,
}

impl ButtonSample {
    /// Both buttons held
    pub fn is_chord(&self) -> bool {
        self.left && self.right
    }
}

/// Polls the bottom buttons for the flashlight chord
pub struct InputMonitor<B> {
    buttons: B,
    poll_ms: u32,
}

impl<B: Buttons> InputMonitor<B> {
    /// Create a monitor polling every `poll_ms` while waiting for release
    pub fn new(buttons: B, poll_ms: u32) -> Self {
        Self { buttons, poll_ms }
    }

    /// Read both buttons once
    ///
    /// Both lines are always read so the sample is a consistent pair.
    pub fn sample(&mut self) -> ButtonSample {
        let left = self.buttons.read(Button::BottomLeft);
        let right = self.buttons.read(Button::BottomRight);
        ButtonSample { left, right }
    }

    /// Check for a chord in a single sample
    pub fn poll_chord(&mut self) -> bool {
        self.sample().is_chord()
    }

    /// Block until either button is released
    ///
    /// Returns the number of poll intervals spent waiting.
    pub fn wait_for_release<D: DelayNs>(&mut self, delay: &mut D) -> u32 {
        let mut polls: u32 = 0;
        while self.poll_chord() {
            delay.delay_ms(self.poll_ms);
            polls = polls.saturating_add(1);
        }
        #[cfg(feature = "defmt")]
        defmt::trace!("chord released after {=u32} polls", polls);
        polls
    }

    /// Poll interval used by [`Self::wait_for_release`]
    pub fn poll_ms(&self) -> u32 {
        self.poll_ms
    }

    pub fn buttons(&self) -> &B {
        &self.buttons
    }

    /// Give the button reader back
    pub fn release(self) -> B {
        self.buttons
    }
}
