//! Logical button inputs
//!
//! The badge exposes its front buttons by logical name. Reads are polled
//! and never block.

use crate::gpio::{ActiveLevel, InputPin};

/// Logical buttons used by the clock face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Lower left button
    BottomLeft,
    /// Lower right button
    BottomRight,
}

/// Button reader
pub trait Buttons {
    /// Return `true` while `button` is held down
    fn read(&mut self, button: Button) -> bool;
}

/// [`Buttons`] implementation over two GPIO input pins
pub struct PinButtons<L, R> {
    left: L,
    right: R,
    active: ActiveLevel,
}

impl<L: InputPin, R: InputPin> PinButtons<L, R> {
    /// Wrap the bottom-left and bottom-right pins
    pub fn new(left: L, right: R, active: ActiveLevel) -> Self {
        Self {
            left,
            right,
            active,
        }
    }

    /// Give the pins back
    pub fn release(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L: InputPin, R: InputPin> Buttons for PinButtons<L, R> {
    fn read(&mut self, button: Button) -> bool {
        match button {
            Button::BottomLeft => self.active.is_active(&self.left),
            Button::BottomRight => self.active.is_active(&self.right),
        }
    }
}
