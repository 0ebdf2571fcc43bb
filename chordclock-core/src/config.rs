//! Badge configuration
//!
//! Everything here is fixed at build time. [`BadgeConfig::default`] is the
//! stock badge; boards with a different battery chemistry or screen layout
//! build their own value and hand it to the controller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Battery voltage shown as an empty gauge
pub const BATTERY_MIN: f32 = 3.4;

/// Battery voltage shown as a full gauge
pub const BATTERY_MAX: f32 = 4.2;

/// Number of segments in the battery gauge
pub const BATTERY_BAR_LEN: usize = 20;

/// Dim level used for both LED groups in flashlight mode
pub const FLASHLIGHT_LEVEL: u8 = 8;

/// Release-wait poll interval in milliseconds
pub const RELEASE_POLL_MS: u32 = 1;

/// Vertical placement of the clock face elements, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Battery bar row
    pub battery_y: i16,
    /// Time row
    pub time_y: i16,
    /// Date row
    pub date_y: i16,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            battery_y: 0,
            time_y: 18,
            date_y: 50,
        }
    }
}

/// Badge configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BadgeConfig {
    /// Empty-gauge voltage (V)
    pub battery_min_v: f32,
    /// Full-gauge voltage (V)
    pub battery_max_v: f32,
    /// Flashlight dim level for top and bottom LEDs
    pub flashlight_level: u8,
    /// Poll interval while waiting for a chord to be released (ms)
    pub release_poll_ms: u32,
    /// Screen rows
    pub layout: Layout,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            battery_min_v: BATTERY_MIN,
            battery_max_v: BATTERY_MAX,
            flashlight_level: FLASHLIGHT_LEVEL,
            release_poll_ms: RELEASE_POLL_MS,
            layout: Layout::default(),
        }
    }
}
