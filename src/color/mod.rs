//! Color value and conversion module
//!
//! This module holds the lazily converted [`Color`] value, the parser for
//! its textual form, the hex/rgb/hsv conversions it delegates to, and the
//! brightness adjustments built on top of them.

pub mod brightness;
pub mod conversion;
pub mod parse;
pub mod value;

pub use conversion::ColorConverter;
pub use parse::{parse_color, ParsedColor};
pub use value::Color;
