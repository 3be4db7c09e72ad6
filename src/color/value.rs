//! The lazily converted color value
//!
//! A [`Color`] holds one authoritative representation (hex, rgb or hsv),
//! the one most recently assigned. The other two are derived on first read
//! and memoized until the next assignment replaces the whole set.
//!
//! Memoization uses [`OnceCell`], so a `Color` can be moved between threads
//! but not shared between them without external locking.

use std::cell::OnceCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, trace};

use super::conversion::ColorConverter;
use super::parse::{parse_color, ParsedColor};
use crate::constants::{hsv, rgb, DEFAULT_COLOR, OPAQUE};
use crate::{ColorError, Result};

/// The representation a color was last assigned
#[derive(Debug, Clone, PartialEq)]
enum Source {
    Hex(String),
    Rgb([f64; 3]),
    Hsv([f64; 3]),
}

/// Memo slots for representations derived from the source
#[derive(Debug, Default)]
struct Derived {
    rgb: OnceCell<[f64; 3]>,
    hsv: OnceCell<[f64; 3]>,
    hex: OnceCell<String>,
}

/// A single color with cached hex, rgb and hsv representations
///
/// ```rust
/// use lazy_color::Color;
///
/// let color: Color = "#336699".parse()?;
/// assert_eq!(color.rgb(), [51.0, 102.0, 153.0]);
/// assert_eq!(color.hsv(), [210.0, 67.0, 60.0]);
/// # Ok::<(), lazy_color::ColorError>(())
/// ```
///
/// # Cloning
///
/// `clone()` rebuilds the color from its rgb triplet, as if parsing
/// `rgb(r,g,b)`: alpha resets to 1, fractional channels are truncated,
/// and the copy no longer remembers whether it came from hex or hsv.
#[derive(Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    alpha: f64,
    source: Source,
    derived: Derived,
    converter: ColorConverter,
}

impl Color {
    /// Parse a color from `#hex`, `rgb(...)`, `rgba(...)` or `hsv(...)`
    ///
    /// # Errors
    ///
    /// - `UnknownFormat` / `UnsupportedFormat` for input outside the grammar
    /// - `InvalidComponent` if an argument is not numeric
    /// - `InvalidLength` if a function has the wrong number of arguments
    /// - `InvalidHex` if a hex literal cannot be decoded
    ///
    /// Hex literals are decoded when assigned rather than on first read, so
    /// `Color::new("#zz")` fails here instead of yielding black later.
    pub fn new(input: &str) -> Result<Self> {
        let mut color = Self::opaque(Source::Rgb([0.0; 3]));

        match parse_color(input)? {
            ParsedColor::Hex(hex) => color.set_hex(hex)?,
            ParsedColor::Rgb(values) => color.set_rgb(&values)?,
            ParsedColor::Rgba(values) => color.set_rgba(&values)?,
            ParsedColor::Hsv(values) => color.set_hsv(&values)?,
        }

        debug!(input, "Parsed color");
        Ok(color)
    }

    /// Create a color from an rgb triplet (0-255)
    pub fn from_rgb(rgb: [f64; 3]) -> Self {
        Self::opaque(Source::Rgb(rgb))
    }

    /// Create a color from an hsv triplet (degrees, percent, percent)
    pub fn from_hsv(hsv: [f64; 3]) -> Self {
        Self::opaque(Source::Hsv(hsv))
    }

    /// Create a color from a hex literal such as `#336699` or `#369`
    pub fn from_hex(hex: impl Into<String>) -> Result<Self> {
        let mut color = Self::from_rgb([0.0; 3]);
        color.set_hex(hex)?;
        Ok(color)
    }

    fn opaque(source: Source) -> Self {
        Self {
            alpha: OPAQUE,
            source,
            derived: Derived::default(),
            converter: ColorConverter::new(),
        }
    }

    /// Make `source` authoritative, dropping every derived value
    fn replace(&mut self, source: Source) {
        debug!(?source, "Replacing color representation");
        self.alpha = OPAQUE;
        self.source = source;
        self.derived = Derived::default();
    }

    /// Opacity in `[0, 1]`
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Set the opacity without touching the color representations
    ///
    /// Values outside `[0, 1]` are clamped.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `alpha` is NaN or infinite; the color is left
    /// untouched
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        self.alpha = checked_alpha(alpha)?;
        Ok(())
    }

    /// Rgb triplet (0-255), derived from hex or hsv on first read
    pub fn rgb(&self) -> [f64; 3] {
        match &self.source {
            Source::Rgb(rgb) => *rgb,
            Source::Hex(hex) => *self.derived.rgb.get_or_init(|| {
                trace!(hex = hex.as_str(), "Deriving rgb from hex");
                self.converter.validated_hex_to_rgb(hex)
            }),
            Source::Hsv(hsv) => *self.derived.rgb.get_or_init(|| {
                trace!(?hsv, "Deriving rgb from hsv");
                self.converter.hsv_to_rgb(*hsv)
            }),
        }
    }

    /// Assign an rgb triplet; resets alpha to 1
    ///
    /// # Errors
    ///
    /// `InvalidLength` unless `rgb` has exactly 3 elements. The color is
    /// left untouched on error.
    pub fn set_rgb(&mut self, rgb: &[f64]) -> Result<()> {
        let rgb = channels(rgb)?;
        self.replace(Source::Rgb(rgb));
        Ok(())
    }

    /// Rgb triplet followed by alpha
    pub fn rgba(&self) -> [f64; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, self.alpha]
    }

    /// Assign rgb from the first 3 elements and alpha from the 4th
    ///
    /// Alpha is clamped to `[0, 1]`, as in [`set_alpha`](Self::set_alpha).
    ///
    /// # Errors
    ///
    /// - `InvalidLength` unless `rgba` has exactly 4 elements
    /// - `InvalidParameter` if the alpha is NaN or infinite
    pub fn set_rgba(&mut self, rgba: &[f64]) -> Result<()> {
        ColorError::check_length(rgb::CHANNELS_WITH_ALPHA, rgba.len())?;
        let alpha = checked_alpha(rgba[rgb::CHANNELS])?;
        self.set_rgb(&rgba[..rgb::CHANNELS])?;
        self.alpha = alpha;
        Ok(())
    }

    /// Hsv triplet (degrees, percent, percent), derived from rgb on first
    /// read
    ///
    /// The array is a copy; changing it does not affect the color.
    pub fn hsv(&self) -> [f64; 3] {
        match &self.source {
            Source::Hsv(hsv) => *hsv,
            _ => *self.derived.hsv.get_or_init(|| {
                let rgb = self.rgb();
                trace!(?rgb, "Deriving hsv from rgb");
                self.converter.rgb_to_hsv(rgb)
            }),
        }
    }

    /// Assign an hsv triplet; resets alpha to 1
    ///
    /// # Errors
    ///
    /// `InvalidLength` unless `hsv` has exactly 3 elements
    pub fn set_hsv(&mut self, hsv: &[f64]) -> Result<()> {
        let hsv = channels(hsv)?;
        self.replace(Source::Hsv(hsv));
        Ok(())
    }

    pub(crate) fn set_hsv_triplet(&mut self, hsv: [f64; 3]) {
        self.replace(Source::Hsv(hsv));
    }

    /// Hex literal; the assigned literal verbatim, or `#rrggbb` derived
    /// from rgb
    pub fn hex(&self) -> String {
        match &self.source {
            Source::Hex(hex) => hex.clone(),
            _ => self
                .derived
                .hex
                .get_or_init(|| {
                    let rgb = self.rgb();
                    trace!(?rgb, "Deriving hex from rgb");
                    self.converter.rgb_to_hex(rgb)
                })
                .clone(),
        }
    }

    /// Assign a hex literal; resets alpha to 1
    ///
    /// # Errors
    ///
    /// `InvalidHex` if the literal is not `#rgb`, `#rgba`, `#rrggbb` or
    /// `#rrggbbaa`
    pub fn set_hex(&mut self, hex: impl Into<String>) -> Result<()> {
        let hex = hex.into();
        self.converter.validate_hex(&hex)?;
        self.replace(Source::Hex(hex));
        Ok(())
    }

    /// Hsv value (brightness) component
    pub fn value(&self) -> f64 {
        self.hsv()[2]
    }
}

/// Clamp an opacity into `[0, 1]`, rejecting non-finite values
fn checked_alpha(alpha: f64) -> Result<f64> {
    if !alpha.is_finite() {
        return Err(ColorError::InvalidParameter {
            parameter: "alpha".to_string(),
            value: alpha.to_string(),
        });
    }
    Ok(alpha.clamp(0.0, OPAQUE))
}

/// Copy a 3 element slice into an array
fn channels(values: &[f64]) -> Result<[f64; 3]> {
    ColorError::check_length(hsv::CHANNELS, values.len())?;
    Ok([values[0], values[1], values[2]])
}

impl Clone for Color {
    fn clone(&self) -> Self {
        Self::from_rgb(self.rgb().map(f64::trunc))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_hex(DEFAULT_COLOR).unwrap_or_else(|_| Self::from_rgb([0.0; 3]))
    }
}

impl PartialEq for Color {
    /// Colors are equal when their rgb triplets and alpha match
    fn eq(&self, other: &Self) -> bool {
        self.rgba() == other.rgba()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl fmt::Display for Color {
    /// The authoritative representation in constructor syntax
    ///
    /// An opaque color prints its source: the hex literal verbatim,
    /// `rgb(r, g, b)` or `hsv(h, s, v)`. A translucent color prints
    /// `rgba(r, g, b, a)`, which for a hex or hsv source goes through the
    /// derived rgb. Parsing truncates color channels to integers, so only
    /// integral channels survive a round trip exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            _ if self.alpha != OPAQUE => {
                let [r, g, b] = self.rgb();
                write!(f, "rgba({}, {}, {}, {})", r, g, b, self.alpha)
            }
            Source::Hex(hex) => f.write_str(hex),
            Source::Rgb([r, g, b]) => write!(f, "rgb({}, {}, {})", r, g, b),
            Source::Hsv([h, s, v]) => write!(f, "hsv({}, {}, {})", h, s, v),
        }
    }
}
