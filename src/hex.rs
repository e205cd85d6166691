//! Hex color normalization, encoding and decoding.

use core::fmt::Write;

use crate::types::{ColorError, Rgb};

const HEX_SHAPE: &str = "#rgb or #rrggbb hex digits";

/// A canonical hex color: `#` followed by six lowercase hex digits.
///
/// Only [`normalize_hex`] and [`rgb_to_hex`] produce values of this type, so
/// the contents always decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hex(heapless::String<7>);

impl Hex {
    /// Returns the canonical `#rrggbb` text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decodes the three channel bytes.
    pub fn to_rgb(&self) -> Rgb {
        let bytes = self.0.as_bytes();
        Rgb::new(
            byte_at(bytes, 1),
            byte_at(bytes, 3),
            byte_at(bytes, 5),
        )
    }

    /// Case-insensitive comparison against arbitrary stored text.
    pub fn matches(&self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other.trim())
    }
}

impl core::fmt::Display for Hex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_hex(s)
    }
}

impl AsRef<str> for Hex {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl serde::Serialize for Hex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Hex {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        normalize_hex(&text).map_err(serde::de::Error::custom)
    }
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn pair(hi: u8, lo: u8) -> Option<u8> {
    Some(nibble(hi)? << 4 | nibble(lo)?)
}

// Only called on canonical text, where every pair decodes.
fn byte_at(bytes: &[u8], at: usize) -> u8 {
    pair(bytes[at], bytes[at + 1]).unwrap_or(0)
}

fn encode(rgb: Rgb) -> Hex {
    let mut text = heapless::String::new();
    // Seven bytes always fit.
    let _ = write!(text, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue);
    Hex(text)
}

/// Normalizes user text into a canonical hex color.
///
/// Surrounding whitespace and one leading `#` are ignored. Exactly three or six
/// hex digits are accepted in either case; the three-digit shorthand doubles
/// each digit (`"fa0"` becomes `"#ffaa00"`).
///
/// # Errors
/// `InvalidFormat` for any other length or a non-hex digit.
pub fn normalize_hex(input: &str) -> Result<Hex, ColorError> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits).as_bytes();
    let invalid = ColorError::InvalidFormat { expected: HEX_SHAPE };

    let rgb = match digits.len() {
        3 => {
            let r = nibble(digits[0]).ok_or(invalid)?;
            let g = nibble(digits[1]).ok_or(invalid)?;
            let b = nibble(digits[2]).ok_or(invalid)?;

            Rgb::new(r * 17, g * 17, b * 17)
        }
        6 => Rgb::new(
            pair(digits[0], digits[1]).ok_or(invalid)?,
            pair(digits[2], digits[3]).ok_or(invalid)?,
            pair(digits[4], digits[5]).ok_or(invalid)?,
        ),
        _ => return Err(invalid),
    };

    Ok(encode(rgb))
}

/// Decodes a six-digit hex color into RGB.
///
/// The leading `#` and surrounding whitespace are optional. Shorthand is not
/// accepted here; expand it with [`normalize_hex`] first.
///
/// # Errors
/// `InvalidFormat` unless the text is exactly six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits).as_bytes();
    let invalid = ColorError::InvalidFormat { expected: "#rrggbb hex digits" };

    if digits.len() != 6 {
        return Err(invalid);
    }

    Ok(Rgb::new(
        pair(digits[0], digits[1]).ok_or(invalid)?,
        pair(digits[2], digits[3]).ok_or(invalid)?,
        pair(digits[4], digits[5]).ok_or(invalid)?,
    ))
}

/// Encodes RGB as a canonical lowercase `#rrggbb` hex color.
///
/// Channels are `u8`, so they are always in range; build the triple with
/// [`crate::rgb_clamped`] when starting from wider integers.
pub fn rgb_to_hex(rgb: Rgb) -> Hex {
    encode(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibble_accepts_both_cases() {
        assert_eq!(nibble(b'a'), Some(10));
        assert_eq!(nibble(b'F'), Some(15));
        assert_eq!(nibble(b'g'), None);
    }

    #[test]
    fn canonical_hex_decodes() {
        let hex = normalize_hex("#0080FF").unwrap();
        assert_eq!(hex.to_rgb(), Rgb::new(0, 128, 255));
    }

    #[test]
    fn only_one_hash_is_stripped() {
        assert!(normalize_hex("##fff").is_err());
    }

    #[test]
    fn non_ascii_input_is_rejected() {
        assert!(normalize_hex("ééé").is_err());
        assert!(hex_to_rgb("ff00é").is_err());
    }
}
