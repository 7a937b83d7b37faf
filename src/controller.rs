//! Mode machine: the single mutable state block of the core.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::mode::Mode;
use crate::palette::{ColorInfo, LEVELS, PALETTE};
use crate::render::{ScreenRequest, TimerView};
use crate::timer::ShutoffTimer;
use crate::wall_time::WallTime;

/// Work the tick loop must perform on the controller's behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRequest {
    /// Nothing beyond the state change already applied.
    None,
    /// Run the blocking clock synchronization.
    SyncClock,
}

/// Button-driven state machine over the four modes.
///
/// Owns every mutable index: active mode, color, level and the shutoff
/// timer. All mutation goes through the two button handlers, so the
/// single-writer invariant is a property of ownership rather than of
/// locking. Indices are stepped modulo their table lengths; an
/// out-of-range index cannot occur.
#[derive(Debug)]
pub struct Controller {
    mode: Mode,
    color_index: usize,
    level_index: usize,
    timer: ShutoffTimer,
    dirty: bool,
}

impl Controller {
    /// Power-on state: first color, full brightness, timer disarmed.
    ///
    /// Starts dirty so the first tick draws the screen.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Light,
            color_index: 0,
            level_index: 0,
            timer: ShutoffTimer::new(),
            dirty: true,
        }
    }

    /// Primary button: dispatch to the active mode's action.
    ///
    /// `now` is the latest RTC read; the timer mode arms from it.
    pub fn on_primary(&mut self, now: WallTime) -> ControlRequest {
        self.dirty = true;
        match self.mode {
            Mode::Light => {
                self.color_index = (self.color_index + 1) % PALETTE.len();
                #[cfg(feature = "esp32-log")]
                println!("[Controller] color -> {}", self.color().label);
                ControlRequest::None
            }
            Mode::Level => {
                self.level_index = (self.level_index + 1) % LEVELS.len();
                #[cfg(feature = "esp32-log")]
                println!("[Controller] level -> {}", self.level());
                ControlRequest::None
            }
            Mode::Timer => {
                self.timer.select_next(now);
                ControlRequest::None
            }
            Mode::ClockSync => ControlRequest::SyncClock,
        }
    }

    /// Secondary button: advance to the next mode. Available in every
    /// mode, no guard.
    pub fn on_secondary(&mut self) {
        self.mode = self.mode.next();
        self.dirty = true;
        #[cfg(feature = "esp32-log")]
        println!("[Controller] mode -> {}", self.mode.label());
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn color_index(&self) -> usize {
        self.color_index
    }

    pub const fn level_index(&self) -> usize {
        self.level_index
    }

    /// Selected color preset.
    pub fn color(&self) -> &'static ColorInfo {
        &PALETTE[self.color_index]
    }

    /// Brightness scalar of the selected level.
    pub const fn level(&self) -> u8 {
        LEVELS[self.level_index]
    }

    pub const fn timer(&self) -> &ShutoffTimer {
        &self.timer
    }

    /// Whether the next tick must issue a full redraw.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the tick loop after a successful full redraw.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Draw request for the active mode's screen.
    pub fn screen(&self) -> ScreenRequest {
        ScreenRequest {
            caption: self.mode.label(),
            color: self.color(),
            level_index: self.level_index,
            level: self.level(),
            timer: match self.mode {
                Mode::Timer => Some(TimerView::from(&self.timer)),
                Mode::Light | Mode::Level | Mode::ClockSync => None,
            },
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
