//! Wall-clock time source

/// Errors reported by the clock source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// The RTC has not been set since power-up
    NotSet,
    /// The RTC returned fields outside their valid ranges
    InvalidTime,
}

/// Calendar date and time of day in local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl DateTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Check every field is inside its calendar range
    ///
    /// Day-of-month is only checked against 31; month lengths are the
    /// clock's business.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour < 24
            && self.minute < 60
            && self.second < 60
    }
}

/// Local time source
pub trait Clock {
    /// Read the current local date and time
    fn local_time(&mut self) -> Result<DateTime, ClockError>;
}
