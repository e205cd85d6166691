//! Parsing and formatting of the RGB, HSL and HSV text fields.
//!
//! Parsers search for the triple anywhere in the text, so decorated input such
//! as `rgb(255, 0, 128)` or `hsl(120°, 50%, 40%)` is accepted as typed.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{ColorError, Hsl, Hsv, Rgb};

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})").expect("valid rgb pattern")
});

// Hue, then two percentages; the hue may be followed by a degree sign.
static HUE_PERCENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,3})[°\s,]+\s*([0-9]{1,3})%[,\s]+\s*([0-9]{1,3})%")
        .expect("valid hue/percent pattern")
});

const RGB_SHAPE: &str = "r, g, b with each channel 0-255";
const HUE_PERCENT_SHAPE: &str = "h, s%, l% with hue 0-360 and percentages 0-100";

// Groups are at most three ASCII digits, so they always fit a u16.
fn group(caps: &Captures<'_>, index: usize) -> u16 {
    caps.get(index)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(u16::MAX)
}

fn hue_percent_triple(text: &str) -> Result<(u16, u8, u8), ColorError> {
    let invalid = ColorError::InvalidFormat { expected: HUE_PERCENT_SHAPE };
    let caps = HUE_PERCENT_PATTERN.captures(text).ok_or(invalid)?;
    let (hue, first, second) = (group(&caps, 1), group(&caps, 2), group(&caps, 3));

    if hue > 360 || first > 100 || second > 100 {
        return Err(invalid);
    }

    Ok((hue % 360, first as u8, second as u8))
}

/// Parses `"r, g, b"` text into an RGB triple.
///
/// # Errors
/// `InvalidFormat` if no triple is found or a channel exceeds 255.
pub fn parse_rgb_value(text: &str) -> Result<Rgb, ColorError> {
    let invalid = ColorError::InvalidFormat { expected: RGB_SHAPE };
    let caps = RGB_PATTERN.captures(text).ok_or(invalid)?;
    let channel = |index| u8::try_from(group(&caps, index)).map_err(|_| invalid);

    Ok(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Parses `"h, s%, l%"` text into an HSL triple.
///
/// A hue of 360 is accepted and stored as 0.
///
/// # Errors
/// `InvalidFormat` if no triple is found or a component is out of range.
pub fn parse_hsl_value(text: &str) -> Result<Hsl, ColorError> {
    let (hue, saturation, lightness) = hue_percent_triple(text)?;
    Ok(Hsl { hue, saturation, lightness })
}

/// Parses `"h, s%, v%"` text into an HSV triple.
///
/// # Errors
/// `InvalidFormat` if no triple is found or a component is out of range.
pub fn parse_hsv_value(text: &str) -> Result<Hsv, ColorError> {
    let (hue, saturation, value) = hue_percent_triple(text)?;
    Ok(Hsv { hue, saturation, value })
}

/// Formats RGB the way the RGB field shows it: `"r, g, b"`.
pub fn format_rgb(rgb: Rgb) -> String {
    format!("{}, {}, {}", rgb.red, rgb.green, rgb.blue)
}

/// Formats HSL the way the HSL field shows it: `"h°, s%, l%"`.
pub fn format_hsl(hsl: Hsl) -> String {
    format!("{}°, {}%, {}%", hsl.hue, hsl.saturation, hsl.lightness)
}

/// Formats HSV the way the HSV field shows it: `"h°, s%, v%"`.
pub fn format_hsv(hsv: Hsv) -> String {
    format!("{}°, {}%, {}%", hsv.hue, hsv.saturation, hsv.value)
}
