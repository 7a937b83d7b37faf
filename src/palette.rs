//! Color presets and brightness levels.
//!
//! Each preset pairs the ring color with the fill and text colors the
//! display shim uses for the matching screen. Entries are referenced by
//! index only and never mutated.

use smart_leds::RGB8;

/// LED color type used throughout the crate.
pub type Rgb = RGB8;

/// A named color preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorInfo {
    /// Fixed caption for the mode screen.
    pub label: &'static str,
    /// Color written to the LED ring.
    pub led: Rgb,
    /// Screen background for this preset.
    pub fill: Rgb,
    /// Text color readable on `fill`.
    pub text: Rgb,
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

const WHITE: Rgb = rgb(255, 255, 255);
const BLACK: Rgb = rgb(0, 0, 0);

/// The selectable color presets, cycled by the primary button.
pub static PALETTE: [ColorInfo; 9] = [
    ColorInfo {
        label: "red",
        led: rgb(255, 0, 0),
        fill: rgb(255, 0, 0),
        text: WHITE,
    },
    ColorInfo {
        label: "blue",
        led: rgb(0, 0, 255),
        fill: rgb(0, 0, 255),
        text: WHITE,
    },
    ColorInfo {
        label: "green",
        led: rgb(0, 128, 0),
        fill: rgb(0, 255, 0),
        text: BLACK,
    },
    ColorInfo {
        label: "orange",
        led: rgb(255, 165, 0),
        fill: rgb(255, 180, 0),
        text: WHITE,
    },
    ColorInfo {
        label: "purple",
        led: rgb(128, 0, 128),
        fill: rgb(123, 0, 123),
        text: WHITE,
    },
    ColorInfo {
        label: "yellow",
        led: rgb(255, 255, 0),
        fill: rgb(255, 255, 0),
        text: BLACK,
    },
    ColorInfo {
        label: "white",
        led: WHITE,
        fill: WHITE,
        text: BLACK,
    },
    ColorInfo {
        label: "olive",
        led: rgb(128, 128, 0),
        fill: rgb(123, 125, 0),
        text: WHITE,
    },
    ColorInfo {
        label: "forest",
        led: rgb(34, 139, 34),
        fill: rgb(181, 255, 0),
        text: BLACK,
    },
];

/// Brightness levels, full to off. Selected by index; 0 is fully off.
pub const LEVELS: [u8; 7] = [255, 128, 64, 32, 16, 8, 0];
