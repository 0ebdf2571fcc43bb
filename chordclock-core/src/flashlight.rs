//! Flashlight mode
//!
//! Flashlight mode paints every LED white and raises both dim channels.
//! Turning it off only drops the dim channels to zero; the colour buffer
//! keeps its white frame so the next switch-on is just a re-dim. The
//! controller owns the strip: nothing else in the core writes LEDs.

use chordclock_hal::leds::MAX_DIM_LEVEL;
use chordclock_hal::{Color, LedError, LedStrip, LED_COUNT};

/// Drives the LED strip for flashlight mode
pub struct FlashlightController<L> {
    pub(crate) leds: L,
    level: u8,
}

impl<L: LedStrip> FlashlightController<L> {
    /// Create a controller lighting both groups at `level` when on
    ///
    /// Levels above the driver maximum are held to the maximum.
    pub fn new(leds: L, level: u8) -> Self {
        Self {
            leds,
            level: level.min(MAX_DIM_LEVEL),
        }
    }

    /// Switch flashlight mode on or off and commit to the strip
    pub fn set_flashlight(&mut self, on: bool) -> Result<(), LedError> {
        if on {
            // All LEDs at full white need the power-save budget
            self.leds.set_powersave(true)?;
            self.leds.set_all(&[Color::WHITE; LED_COUNT])?;
            self.leds.dim_bottom(self.level)?;
            self.leds.dim_top(self.level)?;
        } else {
            self.leds.dim_bottom(0)?;
            self.leds.dim_top(0)?;
        }

        self.leds.update()
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    /// Give the strip back
    pub fn release(self) -> L {
        self.leds
    }
}
