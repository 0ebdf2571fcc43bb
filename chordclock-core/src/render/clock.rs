//! Time and date strings

use core::fmt::Write;

use chordclock_hal::DateTime;
use heapless::String;

/// `HH:MM:SS AM`
pub type TimeString = String<11>;

/// `DD/MM/YYYY`
pub type DateString = String<10>;

/// Convert a 24-hour hour to its 12-hour form and meridiem
///
/// Midnight is 12 AM and noon is 12 PM.
pub fn to_12_hour(hour: u8) -> (u8, &'static str) {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    (hour12, meridiem)
}

/// Format the time of day as zero-padded 12-hour time
pub fn format_time(now: &DateTime) -> TimeString {
    let (hour, meridiem) = to_12_hour(now.hour);
    let mut s = TimeString::new();
    // Fields are bounded by the clock, the string always fits
    let _ = write!(
        s,
        "{:02}:{:02}:{:02} {}",
        hour, now.minute, now.second, meridiem
    );
    s
}

/// Format the date as zero-padded day/month/year
pub fn format_date(now: &DateTime) -> DateString {
    let mut s = DateString::new();
    let _ = write!(s, "{:02}/{:02}/{:04}", now.day, now.month, now.year);
    s
}
