//! Operating modes.
//!
//! Each mode pairs a primary-button action with a screen; both sides of
//! the pairing are dispatched by exhaustive `match` so adding a mode is
//! checked at compile time.

/// The four operating modes, cycled by the secondary button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Primary button cycles the ring color.
    #[default]
    Light,
    /// Primary button cycles the brightness level.
    Level,
    /// Primary button cycles the shutoff timer duration.
    Timer,
    /// Primary button triggers a clock synchronization.
    ClockSync,
}

impl Mode {
    /// Next mode in the fixed 4-way cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Level,
            Self::Level => Self::Timer,
            Self::Timer => Self::ClockSync,
            Self::ClockSync => Self::Light,
        }
    }

    /// Caption shown in the screen header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Level => "level",
            Self::Timer => "timer",
            Self::ClockSync => "clock",
        }
    }
}
