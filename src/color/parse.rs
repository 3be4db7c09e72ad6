//! Parsing of the textual color grammar
//!
//! ```text
//! color         := hex-literal | function-call
//! hex-literal   := "#" rest-of-string
//! function-call := tag "(" number ("," number)* ")"
//! tag           := "rgb" | "rgba" | "hsv"
//! ```
//!
//! Numbers keep only their leading numeric portion, so `rgb(12px, 4, 9)`
//! reads as `[12, 4, 9]`. Color channels are truncated to integers; the
//! alpha of `rgba(...)` keeps its fraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{hsv, rgb};
use crate::{ColorError, Result};

/// A color string split into its representation and raw components
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedColor {
    /// `#...`, kept verbatim
    Hex(String),
    /// `rgb(r, g, b)`
    Rgb(Vec<f64>),
    /// `rgba(r, g, b, a)`
    Rgba(Vec<f64>),
    /// `hsv(h, s, v)`
    Hsv(Vec<f64>),
}

static FUNCTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)\((.*)\)").expect("valid regex"));

static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("valid regex"));

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid regex")
});

/// Split a color string into its representation
///
/// The argument count is checked before any argument is read, so
/// `rgb(1,2,3,x)` is a length error rather than a component error.
///
/// # Errors
///
/// - `UnknownFormat` if the input is neither `#...` nor `tag(...)`
/// - `UnsupportedFormat` if the tag is not rgb, rgba or hsv
/// - `InvalidLength` if the tag receives the wrong number of arguments
/// - `InvalidComponent` if an argument has no leading number
pub fn parse_color(input: &str) -> Result<ParsedColor> {
    if input.starts_with('#') {
        return Ok(ParsedColor::Hex(input.to_string()));
    }

    let captures = FUNCTION_RE
        .captures(input)
        .ok_or_else(|| ColorError::unknown(input))?;
    let tag = captures[1].trim();
    let args = &captures[2];

    match tag {
        "rgb" => Ok(ParsedColor::Rgb(parse_components(
            args,
            input,
            rgb::CHANNELS,
            None,
        )?)),
        "rgba" => Ok(ParsedColor::Rgba(parse_components(
            args,
            input,
            rgb::CHANNELS_WITH_ALPHA,
            Some(rgb::CHANNELS),
        )?)),
        "hsv" => Ok(ParsedColor::Hsv(parse_components(
            args,
            input,
            hsv::CHANNELS,
            None,
        )?)),
        _ => Err(ColorError::unsupported(input)),
    }
}

/// Parse exactly `expected` comma separated numbers; the token at
/// `alpha_index` keeps its fractional part
fn parse_components(
    args: &str,
    input: &str,
    expected: usize,
    alpha_index: Option<usize>,
) -> Result<Vec<f64>> {
    let tokens: Vec<&str> = args.split(',').collect();
    ColorError::check_length(expected, tokens.len())?;

    tokens
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            let token = token.trim();
            let pattern = if Some(index) == alpha_index {
                &*DECIMAL_RE
            } else {
                &*INTEGER_RE
            };

            pattern
                .find(token)
                .and_then(|number| number.as_str().parse::<f64>().ok())
                .ok_or_else(|| ColorError::InvalidComponent {
                    token: token.to_string(),
                    input: input.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_passthrough() {
        assert_eq!(
            parse_color("#336699").unwrap(),
            ParsedColor::Hex("#336699".to_string())
        );
        // Hex digits are validated by the color, not the parser
        assert_eq!(
            parse_color("#nothex").unwrap(),
            ParsedColor::Hex("#nothex".to_string())
        );
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(
            parse_color("rgb(1, 2, 3)").unwrap(),
            ParsedColor::Rgb(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(
            parse_color("hsv(120,50,50)").unwrap(),
            ParsedColor::Hsv(vec![120.0, 50.0, 50.0])
        );
        assert_eq!(
            parse_color(" rgba ( 10 , 20 , 30 , 0.5 )").unwrap(),
            ParsedColor::Rgba(vec![10.0, 20.0, 30.0, 0.5])
        );
    }

    #[test]
    fn test_parse_leading_numeric_portion() {
        assert_eq!(
            parse_color("rgb(12.7, 4px, -3)").unwrap(),
            ParsedColor::Rgb(vec![12.0, 4.0, -3.0])
        );
        assert_eq!(
            parse_color("rgba(1,2,3,.25)").unwrap(),
            ParsedColor::Rgba(vec![1.0, 2.0, 3.0, 0.25])
        );
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert!(matches!(
            parse_color("rgb(1,2)").unwrap_err(),
            ColorError::InvalidLength {
                expected: 3,
                actual: 2
            }
        ));
        assert!(matches!(
            parse_color("rgba(1,2,3)").unwrap_err(),
            ColorError::InvalidLength {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_parse_arity_checked_before_components() {
        // An empty argument list is one empty token
        let err = parse_color("rgb()").unwrap_err();
        assert!(err.is_length_error());
        assert!(matches!(
            err,
            ColorError::InvalidLength {
                expected: 3,
                actual: 1
            }
        ));

        let err = parse_color("rgb(1,2,3,x)").unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidLength {
                expected: 3,
                actual: 4
            }
        ));

        let err = parse_color("hsv(1,,3,4)").unwrap_err();
        assert!(err.is_length_error());
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = parse_color("teal").unwrap_err();
        assert!(matches!(err, ColorError::UnknownFormat { ref input } if input == "teal"));

        assert!(matches!(
            parse_color("").unwrap_err(),
            ColorError::UnknownFormat { .. }
        ));
    }

    #[test]
    fn test_parse_unsupported_format() {
        let err = parse_color("rgbx(1,2,3)").unwrap_err();
        assert!(matches!(err, ColorError::UnsupportedFormat { ref input } if input == "rgbx(1,2,3)"));

        assert!(matches!(
            parse_color("hsl(1,2,3)").unwrap_err(),
            ColorError::UnsupportedFormat { .. }
        ));
    }

    #[test]
    fn test_parse_invalid_component() {
        let err = parse_color("rgb(a,2,3)").unwrap_err();
        assert!(matches!(err, ColorError::InvalidComponent { ref token, .. } if token == "a"));
        assert!(err.is_format_error());
    }
}
