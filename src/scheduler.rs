//! Tick orchestration and pacing.
//!
//! Modeled as a poll-step scheduler without async: the caller supplies
//! the current `Instant`, `tick` runs one full iteration and returns
//! how long to wait before the next one. The caller owns the actual
//! sleep, so the loop works under any executor or a plain blocking
//! delay.
//!
//! # Usage
//!
//! ```ignore
//! let mut scheduler = TickScheduler::new(buttons, clock, sync, power, battery, display, leds);
//!
//! loop {
//!     let result = scheduler.tick(Instant::now());
//!     sleep(result.sleep_duration);
//! }
//! ```

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::chase::ChaseBuffer;
use crate::controller::{ControlRequest, Controller};
use crate::input::{ButtonInput, InputPoller};
use crate::palette::PALETTE;
use crate::render::{OverlayRequest, RenderSink};
use crate::wall_time::WallTime;
use crate::{
    BatteryMonitor, ClockSource, HardwareError, OutputDriver, PowerController, SyncService,
    SyncUnavailable,
};

/// Fixed tick period. On hardware the LED transmit delay enforces it;
/// here it only sizes the sleep the caller performs between ticks.
pub const TICK_PERIOD: Duration = Duration::from_millis(200);

/// Result of one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// The single control path of the device.
///
/// Owns the controller, the chase buffer and every hardware
/// collaborator; all state mutation happens inside [`tick`], which
/// keeps the whole core single-writer by construction.
///
/// [`tick`]: TickScheduler::tick
pub struct TickScheduler<PB, SB, C, S, P, B, D, O>
where
    PB: ButtonInput,
    SB: ButtonInput,
    C: ClockSource,
    S: SyncService,
    P: PowerController,
    B: BatteryMonitor,
    D: RenderSink,
    O: OutputDriver,
{
    buttons: InputPoller<PB, SB>,
    clock: C,
    sync: S,
    power: P,
    battery: B,
    display: D,
    leds: O,

    controller: Controller,
    chase: ChaseBuffer,
    /// Last good RTC read; reused when a read fails mid-tick.
    wall: WallTime,

    next_tick: Instant,
    period: Duration,
}

impl<PB, SB, C, S, P, B, D, O> TickScheduler<PB, SB, C, S, P, B, D, O>
where
    PB: ButtonInput,
    SB: ButtonInput,
    C: ClockSource,
    S: SyncService,
    P: PowerController,
    B: BatteryMonitor,
    D: RenderSink,
    O: OutputDriver,
{
    /// Create a scheduler with the default 200ms tick.
    pub fn new(
        buttons: InputPoller<PB, SB>,
        clock: C,
        sync: S,
        power: P,
        battery: B,
        display: D,
        leds: O,
    ) -> Self {
        Self::with_period(buttons, clock, sync, power, battery, display, leds, TICK_PERIOD)
    }

    /// Create a scheduler with a custom tick period.
    #[allow(clippy::too_many_arguments)]
    pub fn with_period(
        buttons: InputPoller<PB, SB>,
        clock: C,
        sync: S,
        power: P,
        battery: B,
        display: D,
        leds: O,
        period: Duration,
    ) -> Self {
        Self {
            buttons,
            clock,
            sync,
            power,
            battery,
            display,
            leds,
            controller: Controller::new(),
            // The ring powers on fully lit in the first preset color.
            chase: ChaseBuffer::filled(PALETTE[0].led),
            wall: WallTime::new(0, 0, 0),
            next_tick: Instant::from_millis(0),
            period,
        }
    }

    /// Run one tick.
    ///
    /// In order: read the clock, poll and dispatch buttons, advance the
    /// chase, redraw the screen if dirty, refresh the overlay, transmit
    /// the ring, evaluate the shutoff timer, then compute the next
    /// deadline. A hardware failure in any step skips that step's
    /// output for this tick only.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Latest RTC read. On failure keep the previous value for
        // rendering and skip timer evaluation below.
        let clock_ok = match self.clock.read() {
            Ok(time) => {
                self.wall = time;
                true
            }
            Err(HardwareError) => false,
        };

        let levels = self.buttons.poll();
        if levels.primary {
            if let ControlRequest::SyncClock = self.controller.on_primary(self.wall) {
                // Blocking, multi-second by design; the loop stalls here
                // and the drift reset below absorbs the stall.
                self.sync_clock();
            }
        }
        if levels.secondary {
            self.controller.on_secondary();
        }

        // Animation step: current color at the selected level enters at
        // the head, the rest of the ring shifts outward.
        let color = self.controller.color().led;
        let level = self.controller.level();
        self.chase.tick(color, level);

        if self.controller.is_dirty() {
            let screen = self.controller.screen();
            // A failed draw leaves dirty set so the next tick retries.
            if self.display.draw_screen(&screen).is_ok() {
                self.controller.clear_dirty();
            }
        }

        // Clock and battery overlays refresh every tick.
        let overlay = OverlayRequest {
            time: self.wall,
            battery: self.battery.read().ok(),
        };
        let _ = self.display.draw_overlay(&overlay);

        let _ = self.leds.write(self.chase.colors());

        if clock_ok && self.controller.timer().expired(self.wall) {
            #[cfg(feature = "esp32-log")]
            println!("[TickScheduler] shutoff timer expired, powering off");
            // Irreversible on hardware; nothing to clean up after.
            self.power.power_off();
        }

        self.schedule_next(now)
    }

    fn sync_clock(&mut self) {
        match self.sync.sync_now() {
            Ok(_) => {
                // Reseed from the RTC the sync service just wrote.
                if let Ok(time) = self.clock.read() {
                    self.wall = time;
                }
                #[cfg(feature = "esp32-log")]
                println!("[TickScheduler] clock sync ok");
            }
            Err(SyncUnavailable) => {
                // Prior RTC time stays authoritative.
                #[cfg(feature = "esp32-log")]
                println!("[TickScheduler] clock sync unavailable");
            }
        }
    }

    /// Compute the next deadline with drift correction.
    ///
    /// If we have fallen behind by more than two periods (a blocking
    /// clock sync, a stalled transmit), snap the schedule to `now`
    /// instead of bursting to catch up.
    fn schedule_next(&mut self, now: Instant) -> TickResult {
        let max_drift_ms = self.period.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        self.next_tick += self.period;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Get a reference to the controller.
    pub const fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Get a reference to the chase buffer.
    pub const fn chase(&self) -> &ChaseBuffer {
        &self.chase
    }

    /// Last good wall-clock read.
    pub const fn wall_time(&self) -> WallTime {
        self.wall
    }
}
