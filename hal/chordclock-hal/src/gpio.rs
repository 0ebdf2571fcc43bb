//! GPIO pin abstractions
//!
//! Button lines are plain digital inputs. Chip-specific crates implement
//! [`InputPin`] over their own pin types.

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Electrical level at which an input counts as active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed reads high (pull-down wiring)
    High,
    /// Pressed reads low (pull-up wiring)
    Low,
}

impl ActiveLevel {
    /// Whether `pin` is currently at the active level
    pub fn is_active<P: InputPin>(self, pin: &P) -> bool {
        match self {
            ActiveLevel::High => pin.is_high(),
            ActiveLevel::Low => pin.is_low(),
        }
    }
}
