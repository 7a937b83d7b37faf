//! Wall-clock time as read from the external RTC.

/// Time of day with no date component.
///
/// Ordering is lexicographic by (hours, minutes, seconds), which matches
/// chronological order within a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct WallTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl WallTime {
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Add an offset, carrying seconds into minutes into hours.
    ///
    /// Hours wrap modulo 24. There is no day field, so an offset that
    /// crosses midnight wraps back to the start of the day.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn add_seconds(self, offset: u32) -> Self {
        let seconds = self.seconds as u32 + offset;
        let minutes = self.minutes as u32 + seconds / 60;
        let hours = self.hours as u32 + minutes / 60;
        Self {
            hours: (hours % 24) as u8,
            minutes: (minutes % 60) as u8,
            seconds: (seconds % 60) as u8,
        }
    }

    /// Seconds elapsed since midnight.
    pub const fn seconds_into_day(self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }
}
