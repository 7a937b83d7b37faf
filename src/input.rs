//! Level-triggered button sampling.

use crate::HardwareError;

/// A logical button level source.
///
/// Pressed is `true`; the hardware shim resolves electrical polarity
/// (the physical buttons are active-low).
pub trait ButtonInput {
    /// Instantaneous logic level at the moment of the poll.
    fn is_asserted(&mut self) -> Result<bool, HardwareError>;
}

/// Button levels sampled on one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLevels {
    pub primary: bool,
    pub secondary: bool,
}

/// Samples both buttons once per tick.
///
/// No debouncing and no edge detection: the levels reflect the state at
/// the poll, so a held button repeats its action on every tick and the
/// tick period is the only rate limiter.
#[derive(Debug)]
pub struct InputPoller<A, B> {
    primary: A,
    secondary: B,
}

impl<A: ButtonInput, B: ButtonInput> InputPoller<A, B> {
    pub const fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }

    /// Read both levels. A failed read counts as released for this tick.
    pub fn poll(&mut self) -> ButtonLevels {
        ButtonLevels {
            primary: self.primary.is_asserted().unwrap_or(false),
            secondary: self.secondary.is_asserted().unwrap_or(false),
        }
    }
}
