//! Display abstraction
//!
//! The badge LCD is 160 px wide and is driven as a text surface: the
//! application opens a frame, clears it, prints strings at pixel
//! positions and then commits the whole frame at once.

/// Display width in pixels
pub const SCREEN_WIDTH: u16 = 160;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Display not initialized (board driver, before panel bring-up)
    NotInitialized,
    /// Display already opened by another frame (board driver with a
    /// shared bus)
    Busy,
}

/// Font sizes available on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Small font (~12 pt)
    Font12,
    /// Large font (~20 pt)
    Font20,
}

/// An open drawing session on the display
///
/// Nothing printed becomes visible until [`Frame::update`].
pub trait Frame {
    /// Clear the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Print `text` with its top-left corner at (`x`, `y`)
    ///
    /// `x` may be negative; clipping is up to the driver.
    fn print(&mut self, text: &str, x: i16, y: i16, font: Font) -> Result<(), DisplayError>;

    /// Flip the frame buffer to the screen
    fn update(&mut self) -> Result<(), DisplayError>;
}

/// Display device
pub trait Display {
    type Frame<'a>: Frame
    where
        Self: 'a;

    /// Open a drawing session
    fn open(&mut self) -> Result<Self::Frame<'_>, DisplayError>;
}
