//! Color space conversions between RGB, HSL and HSV.
//!
//! The float math is done by `palette` in the gamma-encoded sRGB space; this
//! module only quantizes to the integer triples shown to users. Quantization
//! rounds half away from zero, so round trips are close but not exact.

use palette::{FromColor, Srgb};

use crate::types::{ColorError, Hsl, Hsv, Rgb, Shade};

type FloatHsl = palette::Hsl;
type FloatHsv = palette::Hsv;

/// Converts to the `Srgb<f32>` (0.0-1.0) value a renderer paints with.
#[inline]
pub fn to_preview(rgb: Rgb) -> Srgb {
    rgb.into_format()
}

fn channel(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

fn percent(unit: f32) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}

// A hue of 359.5 or above rounds onto 360, which is the same angle as 0.
fn degrees(hue: f32) -> u16 {
    (hue.round() as u16) % 360
}

fn from_preview(color: Srgb) -> Rgb {
    Rgb::new(channel(color.red), channel(color.green), channel(color.blue))
}

/// Converts RGB to HSL.
///
/// Achromatic colors (all channels equal) report hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let hsl: FloatHsl = FloatHsl::from_color(to_preview(rgb));
    Hsl {
        hue: degrees(hsl.hue.into_positive_degrees()),
        saturation: percent(hsl.saturation),
        lightness: percent(hsl.lightness),
    }
}

/// Converts HSL to RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let hsl: FloatHsl = FloatHsl::new(
        hsl.hue as f32,
        hsl.saturation as f32 / 100.0,
        hsl.lightness as f32 / 100.0,
    );
    from_preview(Srgb::from_color(hsl))
}

/// Converts RGB to HSV.
///
/// Black reports saturation 0; achromatic colors report hue 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let hsv: FloatHsv = FloatHsv::from_color(to_preview(rgb));
    Hsv {
        hue: degrees(hsv.hue.into_positive_degrees()),
        saturation: percent(hsv.saturation),
        value: percent(hsv.value),
    }
}

/// Converts HSV to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    hsv_float_to_rgb(hsv.hue as f32, hsv.saturation as f32, hsv.value as f32)
}

fn hsv_float_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hsv: FloatHsv = FloatHsv::new(
        hue.rem_euclid(360.0),
        saturation.clamp(0.0, 100.0) / 100.0,
        value.clamp(0.0, 100.0) / 100.0,
    );
    from_preview(Srgb::from_color(hsv))
}

/// A numeric color component given either as a number or as numeric text.
pub trait Component {
    /// Returns the finite numeric value, or `None` if the text does not parse.
    fn to_f32(&self) -> Option<f32>;
}

macro_rules! numeric_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                #[inline]
                fn to_f32(&self) -> Option<f32> {
                    Some(*self as f32).filter(|v| v.is_finite())
                }
            }
        )*
    };
}

numeric_component!(u8, u16, u32, i32, i64, f32, f64);

impl Component for &str {
    fn to_f32(&self) -> Option<f32> {
        self.trim().parse::<f32>().ok().filter(|v| v.is_finite())
    }
}

impl Component for String {
    fn to_f32(&self) -> Option<f32> {
        self.as_str().to_f32()
    }
}

/// Converts HSV given as numbers or numeric text to RGB.
///
/// Hue wraps modulo 360; saturation and value clamp to 0-100. Fractional
/// components are kept until the final channel rounding.
///
/// # Errors
/// `InvalidFormat` if any component is text that does not parse as a number.
pub fn hsv_components_to_rgb<H, S, V>(hue: H, saturation: S, value: V) -> Result<Rgb, ColorError>
where
    H: Component,
    S: Component,
    V: Component,
{
    let invalid = ColorError::InvalidFormat { expected: "numeric hue, saturation and value" };
    Ok(hsv_float_to_rgb(
        hue.to_f32().ok_or(invalid)?,
        saturation.to_f32().ok_or(invalid)?,
        value.to_f32().ok_or(invalid)?,
    ))
}

/// Chooses a legible label shade over a swatch using YIQ luma.
pub fn contrast_shade(rgb: Rgb) -> Shade {
    let luma = rgb.red as u32 * 299 + rgb.green as u32 * 587 + rgb.blue as u32 * 114;
    if luma >= 128 * 1000 {
        Shade::Black
    } else {
        Shade::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_rounding_wraps_to_zero() {
        assert_eq!(degrees(359.6), 0);
        assert_eq!(degrees(359.4), 359);
    }

    #[test]
    fn channel_rounds_half_up() {
        assert_eq!(channel(0.5), 128);
        assert_eq!(channel(1.2), 255);
        assert_eq!(channel(-0.1), 0);
    }

    #[test]
    fn text_components_reject_garbage() {
        assert_eq!("  42.5 ".to_f32(), Some(42.5));
        assert_eq!("abc".to_f32(), None);
        assert_eq!("NaN".to_f32(), None);
    }
}
