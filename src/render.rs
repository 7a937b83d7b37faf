//! Draw requests handed to the display shim.
//!
//! The core never touches pixels. It describes what the active mode
//! wants on screen and the sink owns all layout, fonts and colors
//! beyond the preset table.

use crate::palette::ColorInfo;
use crate::timer::ShutoffTimer;
use crate::wall_time::WallTime;
use crate::{BatteryReading, HardwareError};

/// Shutoff-timer details shown on the timer screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerView {
    /// Selected slot in the duration table.
    pub index: usize,
    pub enabled: bool,
    /// Armed target time; stale while disarmed.
    pub target: WallTime,
}

impl From<&ShutoffTimer> for TimerView {
    fn from(timer: &ShutoffTimer) -> Self {
        Self {
            index: timer.index(),
            enabled: timer.is_enabled(),
            target: timer.target(),
        }
    }
}

/// Full-screen draw request for the active mode.
#[derive(Debug, Clone, Copy)]
pub struct ScreenRequest {
    /// Mode caption for the header.
    pub caption: &'static str,
    /// Selected color preset.
    pub color: &'static ColorInfo,
    /// Index into the brightness level table.
    pub level_index: usize,
    /// Brightness scalar of the selected level; 0 means the ring is off.
    pub level: u8,
    /// Present only on the timer screen.
    pub timer: Option<TimerView>,
}

/// Always-refreshed overlay: wall clock plus battery status.
#[derive(Debug, Clone, Copy)]
pub struct OverlayRequest {
    pub time: WallTime,
    /// `None` when the telemetry read failed this tick.
    pub battery: Option<BatteryReading>,
}

/// Display sink; owns all pixel-level layout.
pub trait RenderSink {
    /// Redraw the whole mode screen.
    fn draw_screen(&mut self, request: &ScreenRequest) -> Result<(), HardwareError>;

    /// Refresh the clock/battery overlay.
    fn draw_overlay(&mut self, overlay: &OverlayRequest) -> Result<(), HardwareError>;
}
