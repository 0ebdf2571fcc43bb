//! LED strip abstraction
//!
//! The badge carries a fixed strip of RGB LEDs split into a top and a
//! bottom group, each with its own dim channel. Writes are buffered until
//! [`LedStrip::update`] commits them.

/// Number of LEDs on the strip
pub const LED_COUNT: usize = 18;

/// Highest accepted dim level
pub const MAX_DIM_LEVEL: u8 = 8;

/// Errors reported by an LED driver
///
/// The core never produces these itself; it only forwards what the board
/// driver returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Colour slice length does not match the strip
    LengthMismatch,
    /// Dim level above [`MAX_DIM_LEVEL`]
    InvalidLevel,
    /// Driver failed to push data to the LEDs
    Communication,
}

/// 24-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Buffered LED strip driver
pub trait LedStrip {
    /// Replace the colour of every LED
    ///
    /// `colors` must contain exactly [`LED_COUNT`] entries.
    fn set_all(&mut self, colors: &[Color]) -> Result<(), LedError>;

    /// Set the dim level of the bottom group (0 = off)
    fn dim_bottom(&mut self, level: u8) -> Result<(), LedError>;

    /// Set the dim level of the top group (0 = off)
    fn dim_top(&mut self, level: u8) -> Result<(), LedError>;

    /// Select the driver's power-save budget
    fn set_powersave(&mut self, enabled: bool) -> Result<(), LedError>;

    /// Commit buffered state to the hardware
    fn update(&mut self) -> Result<(), LedError>;
}
