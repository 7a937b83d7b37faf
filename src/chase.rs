//! Chase animation over the LED ring.
//!
//! Every tick the current color enters at the head and the rest of the
//! ring shifts one step toward the tail, leaving a trail of the color
//! history at tick granularity (12 steps deep, about 2.4 seconds at the
//! 200ms tick).

use crate::palette::Rgb;

/// Number of LEDs on the ring.
pub const RING_LEDS: usize = 12;

/// Scale an 8-bit channel by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems. Rounds down;
/// scale 0 is fully off, scale 255 is the identity.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Fixed-length shift register of ring colors; index 0 is the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaseBuffer<const N: usize = RING_LEDS> {
    leds: [Rgb; N],
}

impl<const N: usize> ChaseBuffer<N> {
    /// All-black buffer.
    pub const fn new() -> Self {
        Self {
            leds: [Rgb { r: 0, g: 0, b: 0 }; N],
        }
    }

    /// Buffer pre-filled with one color (the power-on state of the ring).
    pub const fn filled(color: Rgb) -> Self {
        Self { leds: [color; N] }
    }

    /// Advance one tick.
    ///
    /// Shifts every LED one step toward the tail (discarding the tail
    /// value), then writes `color` at the head, scaled per channel by
    /// `level`. A level of 255 passes the color through unscaled.
    pub fn tick(&mut self, color: Rgb, level: u8) -> &[Rgb] {
        for i in (1..N).rev() {
            self.leds[i] = self.leds[i - 1];
        }
        let head = if level < 255 {
            Rgb {
                r: scale8(color.r, level),
                g: scale8(color.g, level),
                b: scale8(color.b, level),
            }
        } else {
            color
        };
        if let Some(first) = self.leds.first_mut() {
            *first = head;
        }
        &self.leds
    }

    /// Current ring contents, head first.
    pub const fn colors(&self) -> &[Rgb] {
        &self.leds
    }
}

impl<const N: usize> Default for ChaseBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
