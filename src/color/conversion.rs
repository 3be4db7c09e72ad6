//! Color space conversion utilities
//!
//! Converts between the three representations a [`Color`](crate::Color)
//! can hold:
//! - Hex literal to RGB (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
//! - RGB to HSV and back, with hue in degrees and saturation/value in percent
//! - RGB to a lowercase `#rrggbb` hex literal
//!
//! RGB channels are plain numbers on a 0-255 scale. Every conversion except
//! RGB to hex rounds its result to the nearest integer, so a chain of
//! conversions may drift by at most one unit per channel.

use std::str::FromStr;

use palette::convert::FromColorUnclamped;
use palette::rgb::{FromHexError, Rgb};
use palette::{encoding, Hsv, Srgb, Srgba};

use crate::constants::{hsv, rgb};
use crate::{ColorError, Result};

type RgbF64 = Rgb<encoding::Srgb, f64>;
type HsvF64 = Hsv<encoding::Srgb, f64>;

/// Stateless converter between hex, RGB and HSV triplets
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorConverter;

impl ColorConverter {
    /// Create a new converter
    pub fn new() -> Self {
        Self
    }

    /// Check that a hex literal can be decoded
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` if the digits after `#` are not a
    /// 3, 4, 6 or 8 digit hex number
    pub fn validate_hex(&self, hex: &str) -> Result<()> {
        decode_hex(hex).map(|_| ())
    }

    /// Decode a hex literal into an RGB triplet (0-255)
    ///
    /// Any alpha digits are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidHex` for the same literals
    /// [`validate_hex`](Self::validate_hex) rejects
    pub fn hex_to_rgb(&self, hex: &str) -> Result<[f64; 3]> {
        let color = decode_hex(hex)?;
        Ok([
            f64::from(color.red),
            f64::from(color.green),
            f64::from(color.blue),
        ])
    }

    /// Decode a literal that already passed [`validate_hex`](Self::validate_hex)
    pub(crate) fn validated_hex_to_rgb(&self, hex: &str) -> [f64; 3] {
        debug_assert!(self.validate_hex(hex).is_ok(), "unvalidated hex {hex}");
        self.hex_to_rgb(hex).unwrap_or_default()
    }

    /// Encode an RGB triplet as a lowercase `#rrggbb` literal
    ///
    /// Channels are clamped to 0-255 before encoding.
    pub fn rgb_to_hex(&self, rgb: [f64; 3]) -> String {
        let [r, g, b] = rgb.map(|channel| {
            let channel = if channel.is_nan() { 0.0 } else { channel };
            channel.clamp(0.0, rgb::CHANNEL_MAX) as u8
        });
        format!("#{:x}", Srgb::<u8>::new(r, g, b))
    }

    /// Convert an RGB triplet (0-255) to HSV
    ///
    /// # Returns
    ///
    /// `[hue, saturation, value]`, hue in degrees `[0, 360)`, saturation and
    /// value in percent, each rounded. Channels above 255 yield a value
    /// above 100.
    pub fn rgb_to_hsv(&self, rgb: [f64; 3]) -> [f64; 3] {
        let [r, g, b] = rgb.map(|channel| channel / rgb::CHANNEL_MAX);
        let color = HsvF64::from_color_unclamped(RgbF64::new(r, g, b));

        [
            color.hue.into_positive_degrees(),
            color.saturation * hsv::PERCENT,
            color.value * hsv::PERCENT,
        ]
        .map(round)
    }

    /// Convert an HSV triplet (degrees, percent, percent) to RGB (0-255)
    ///
    /// Hue wraps around the circle. Values above 100 are not clamped and
    /// produce channels above 255.
    pub fn hsv_to_rgb(&self, hsv: [f64; 3]) -> [f64; 3] {
        let [h, s, v] = hsv;
        let color = RgbF64::from_color_unclamped(HsvF64::new(
            h.rem_euclid(hsv::HUE_TURN),
            s / hsv::PERCENT,
            v / hsv::PERCENT,
        ));

        [color.red, color.green, color.blue].map(|channel| round(channel * rgb::CHANNEL_MAX))
    }
}

/// Decode the color bytes of a hex literal, dropping any alpha digits
fn decode_hex(hex: &str) -> Result<Srgb<u8>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let decoded = if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Err(FromHexError::HexFormatError("invalid hex code format"))
    } else {
        match digits.len() {
            4 | 8 => Srgba::<u8>::from_str(digits).map(|color| color.color),
            _ => Srgb::<u8>::from_str(digits),
        }
    };

    decoded.map_err(|source| ColorError::InvalidHex {
        input: hex.to_string(),
        source,
    })
}

/// Round half away from zero; `-0.0` collapses to `0.0`
fn round(value: f64) -> f64 {
    value.round() + 0.0
}
