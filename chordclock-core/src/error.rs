//! Loop faults
//!
//! The loop never recovers from a HAL failure; it reports the fault for
//! the current iteration and tries again on the next one.

use chordclock_hal::{ClockError, DisplayError, LedError, SensorError};

/// A HAL failure observed during one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// LED strip rejected a write
    Led(LedError),
    /// Display failed to open, draw or flip
    Display(DisplayError),
    /// Battery voltage could not be sampled
    Battery(SensorError),
    /// Clock could not be read
    Clock(ClockError),
}

impl From<LedError> for Fault {
    fn from(err: LedError) -> Self {
        Fault::Led(err)
    }
}

impl From<DisplayError> for Fault {
    fn from(err: DisplayError) -> Self {
        Fault::Display(err)
    }
}

impl From<SensorError> for Fault {
    fn from(err: SensorError) -> Self {
        Fault::Battery(err)
    }
}

impl From<ClockError> for Fault {
    fn from(err: ClockError) -> Self {
        Fault::Clock(err)
    }
}
