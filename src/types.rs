//! Core color value types.

use crate::hex::{Hex, rgb_to_hex};
use crate::convert::{rgb_to_hsl, rgb_to_hsv, hsl_to_rgb, hsv_to_rgb};
use palette::Srgb;

/// 8-bit sRGB triple, one channel each for red, green and blue.
pub type Rgb = Srgb<u8>;

/// Builds an [`Rgb`] from wider integers, clamping each channel to 0-255.
pub fn rgb_clamped(red: i32, green: i32, blue: i32) -> Rgb {
    let clamp = |c: i32| c.clamp(0, 255) as u8;
    Rgb::new(clamp(red), clamp(green), clamp(blue))
}

/// Hue-Saturation-Lightness with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees, 0-359.
    pub hue: u16,

    /// Saturation percentage, 0-100.
    pub saturation: u8,

    /// Lightness percentage, 0-100.
    pub lightness: u8,
}

impl Hsl {
    /// Creates an HSL triple, wrapping hue into 0-359 and clamping percentages.
    #[inline]
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }
}

/// Hue-Saturation-Value with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsv {
    /// Hue in degrees, 0-359.
    pub hue: u16,

    /// Saturation percentage, 0-100.
    pub saturation: u8,

    /// Value (brightness) percentage, 0-100.
    pub value: u8,
}

impl Hsv {
    /// Creates an HSV triple, wrapping hue into 0-359 and clamping percentages.
    #[inline]
    pub fn new(hue: u16, saturation: u8, value: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            value: value.min(100),
        }
    }
}

/// Label color that stays legible over a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Black,
    White,
}

impl Shade {
    /// CSS color keyword for this shade.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shade::Black => "black",
            Shade::White => "white",
        }
    }
}

impl core::fmt::Display for Shade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion and parsing errors.
///
/// Malformed input is an expected outcome, so this is the only failure the
/// converter reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Text did not match the expected shape, or a component was out of range.
    #[error("invalid color format: expected {expected}")]
    InvalidFormat {
        /// Human-readable description of the accepted shape, e.g. "r, g, b"
        expected: &'static str,
    },
}

/// The four equivalent representations of one color, as shown side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorState {
    pub hex: Hex,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
}

impl ColorState {
    /// Derives all representations from an RGB triple.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
        }
    }

    /// Derives all representations from a canonical hex color.
    pub fn from_hex(hex: Hex) -> Self {
        let rgb = hex.to_rgb();
        Self {
            hex,
            rgb,
            hsl: rgb_to_hsl(rgb),
            hsv: rgb_to_hsv(rgb),
        }
    }

    /// Keeps the HSL triple as entered and derives the rest from it.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let rgb = hsl_to_rgb(hsl);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl,
            hsv: rgb_to_hsv(rgb),
        }
    }

    /// Keeps the HSV triple as entered and derives the rest from it.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let rgb = hsv_to_rgb(hsv);
        Self {
            hex: rgb_to_hex(rgb),
            rgb,
            hsl: rgb_to_hsl(rgb),
            hsv,
        }
    }

    /// Uppercase hex shown on the preview label.
    pub fn label(&self) -> String {
        self.hex.as_str().to_ascii_uppercase()
    }
}
