//! Error types for the lazy_color library

use thiserror::Error;

/// Result type alias for lazy_color operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Every way constructing or mutating a [`Color`](crate::Color) can fail
#[derive(Error, Debug)]
pub enum ColorError {
    /// Input looks like `tag(...)` but the tag is not rgb, rgba or hsv
    #[error("Unsupported color format: {input}")]
    UnsupportedFormat { input: String },

    /// Input is neither a hex literal nor a `tag(...)` call
    #[error("Unknown color format: {input}")]
    UnknownFormat { input: String },

    /// A representation setter received the wrong number of channels
    #[error("An array with a length of {expected} is expected, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Hex literal whose digits cannot be decoded
    #[error("Invalid hex color: {input}")]
    InvalidHex {
        input: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    /// A `tag(...)` argument without a leading number
    #[error("Invalid color component '{token}' in {input}")]
    InvalidComponent { token: String, input: String },

    /// Configuration file could not be read or written
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for the expected structure
    #[error("Configuration format error: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric setting or alpha is out of range or not finite
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl ColorError {
    /// Create an unsupported-format error for the given input
    pub fn unsupported(input: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            input: input.into(),
        }
    }

    /// Create an unknown-format error for the given input
    pub fn unknown(input: impl Into<String>) -> Self {
        Self::UnknownFormat {
            input: input.into(),
        }
    }

    /// Check the channel count of a setter argument
    pub(crate) fn check_length(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::InvalidLength { expected, actual })
        }
    }

    /// True when the error comes from the textual constructor grammar
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ColorError::UnsupportedFormat { .. }
                | ColorError::UnknownFormat { .. }
                | ColorError::InvalidHex { .. }
                | ColorError::InvalidComponent { .. }
        )
    }

    /// True when a setter was called with the wrong channel count
    pub fn is_length_error(&self) -> bool {
        matches!(self, ColorError::InvalidLength { .. })
    }

    /// Short description suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            ColorError::UnsupportedFormat { .. } => {
                "Only rgb(), rgba() and hsv() color functions are supported.".to_string()
            }
            ColorError::UnknownFormat { input } => {
                format!("'{}' is not a color. Use #rrggbb or rgb(r, g, b).", input)
            }
            ColorError::InvalidHex { input, .. } => {
                format!("'{}' is not a valid hex color.", input)
            }
            ColorError::InvalidLength { expected, .. } => {
                format!("Expected {} color components.", expected)
            }
            ColorError::InvalidComponent { token, .. } => {
                format!("'{}' is not a number.", token)
            }
            ColorError::InvalidParameter { parameter, value } => {
                format!("{} cannot be {}.", parameter, value)
            }
            _ => "Could not load the color configuration.".to_string(),
        }
    }
}
