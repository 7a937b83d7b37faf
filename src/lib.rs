#![no_std]

pub mod chase;
pub mod controller;
pub mod input;
pub mod mode;
pub mod palette;
pub mod render;
pub mod scheduler;
pub mod timer;
pub mod wall_time;

pub use chase::{ChaseBuffer, RING_LEDS, scale8};
pub use controller::{ControlRequest, Controller};
pub use input::{ButtonInput, ButtonLevels, InputPoller};
pub use mode::Mode;
pub use palette::{ColorInfo, LEVELS, PALETTE, Rgb};
pub use render::{OverlayRequest, RenderSink, ScreenRequest, TimerView};
pub use scheduler::{TICK_PERIOD, TickResult, TickScheduler};
pub use timer::{DURATIONS, ShutoffTimer};
pub use wall_time::WallTime;

pub use embassy_time::{Duration, Instant};

/// A button, clock, telemetry, display or LED transaction failed.
///
/// Fatal to the current tick only: the scheduler skips the dependent
/// output and carries on with the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareError;

/// Network time acquisition failed. Stored RTC time is left intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncUnavailable;

/// Abstract LED driver trait
///
/// Implement this trait to push the chase buffer to the physical ring.
/// The driver's transmit delay is what paces the tick loop in hardware.
pub trait OutputDriver {
    /// Write colors to the LED ring
    fn write(&mut self, colors: &[Rgb]) -> Result<(), HardwareError>;
}

/// Read access to the external real-time clock.
pub trait ClockSource {
    /// Current wall-clock time.
    fn read(&mut self) -> Result<WallTime, HardwareError>;
}

/// Blocking network time synchronization.
///
/// `sync_now` acquires authoritative time and writes it back to the RTC
/// before returning. The tick loop stalls for its whole duration; there
/// is no cancellation beyond the network stack's own timeouts.
pub trait SyncService {
    fn sync_now(&mut self) -> Result<WallTime, SyncUnavailable>;
}

/// Power controller. On hardware `power_off` cuts the rail and never
/// returns control; test doubles may simply record the call.
pub trait PowerController {
    fn power_off(&mut self);
}

/// Battery telemetry snapshot, consumed only by the status overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub volts: f32,
    pub charging: bool,
}

/// Battery voltage and charge state source.
pub trait BatteryMonitor {
    fn read(&mut self) -> Result<BatteryReading, HardwareError>;
}
