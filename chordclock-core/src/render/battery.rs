//! Battery gauge

use heapless::String;

use crate::config::BATTERY_BAR_LEN;
use crate::range::map_range;

/// Gauge glyphs
const FILL: char = '=';
const BLANK: char = ' ';
const BORDER: char = '|';

/// Rendered gauge: border, segments, border
pub type BatteryBar = String<{ BATTERY_BAR_LEN + 2 }>;

/// Number of filled segments for `voltage` on a `[min_v, max_v]` gauge
///
/// The count is floored and then held to `[0, BATTERY_BAR_LEN]`, so a
/// charger spike or a sagging cell shows as a full or empty gauge. A NaN
/// reading shows as empty.
pub fn segments(voltage: f32, min_v: f32, max_v: f32) -> usize {
    let raw = libm::floorf(map_range(voltage, min_v, max_v, 0.0, BATTERY_BAR_LEN as f32));
    if !(0.0..=BATTERY_BAR_LEN as f32).contains(&raw) {
        #[cfg(feature = "defmt")]
        defmt::debug!("battery voltage {=f32} outside gauge range", voltage);
    }
    // NaN.max(0.0) is 0.0
    raw.max(0.0).min(BATTERY_BAR_LEN as f32) as usize
}

/// Draw a gauge with `filled` segments
pub fn battery_bar(filled: usize) -> BatteryBar {
    let filled = filled.min(BATTERY_BAR_LEN);
    let mut bar = BatteryBar::new();
    // Capacity is exactly BATTERY_BAR_LEN + 2, pushes cannot overflow
    let _ = bar.push(BORDER);
    for i in 0..BATTERY_BAR_LEN {
        let _ = bar.push(if i < filled { FILL } else { BLANK });
    }
    let _ = bar.push(BORDER);
    bar
}
