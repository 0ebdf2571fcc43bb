//! Horizontal text placement
//!
//! Fonts are monospaced, so centering only needs a character count and a
//! per-character pixel width.

use chordclock_hal::display::SCREEN_WIDTH;

/// Horizontal centre of the screen
pub const SCREEN_CENTER_X: i16 = (SCREEN_WIDTH / 2) as i16;

/// Character pitch of the small font
pub const SMALL_CHAR_PX: u16 = 8;

/// Character pitch of the large font as used for the time
pub const TIME_CHAR_PX: u16 = 14;

/// Centering metric for the date line
pub const DATE_CHAR_PX: u16 = 16;

/// X position that centres `len` characters of `char_px` pitch
///
/// `SCREEN_CENTER_X - round(len / 2 * char_px)`, with halves rounded to
/// even. Text wider than the screen gets a negative position.
pub fn center_x(len: usize, char_px: u16) -> i16 {
    let width = len as i32 * i32::from(char_px);
    let half = width / 2 + ((width & 1) & ((width / 2) & 1));
    (i32::from(SCREEN_CENTER_X) - half) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_even_length() {
        // "07/03/2024"
        assert_eq!(center_x(10, DATE_CHAR_PX), 0);
        assert_eq!(center_x(20, SMALL_CHAR_PX), 0);
        assert_eq!(center_x(4, SMALL_CHAR_PX), 64);
    }

    #[test]
    fn test_odd_length() {
        // "12:30:05 AM"
        assert_eq!(center_x(11, TIME_CHAR_PX), 3);
        assert_eq!(center_x(3, SMALL_CHAR_PX), 68);
    }

    #[test]
    fn test_half_pixel_rounds_to_even() {
        // 1 / 2 * 5 = 2.5
        assert_eq!(center_x(1, 5), 78);
        // 3 / 2 * 3 = 4.5
        assert_eq!(center_x(3, 3), 76);
        // 5 / 2 * 3 = 7.5
        assert_eq!(center_x(5, 3), 72);
    }

    #[test]
    fn test_wide_text_goes_negative() {
        assert_eq!(center_x(22, SMALL_CHAR_PX), -8);
    }

    proptest! {
        #[test]
        fn matches_float_formula(len in 0usize..64, char_px in 1u16..32) {
            let expected = 80.0 - (len as f32 / 2.0 * f32::from(char_px)).round_ties_even();
            prop_assert_eq!(f32::from(center_x(len, char_px)), expected);
        }
    }
}
