//! Configuration for contrast adjustment.
//!
//! [`ContrastConfig`] groups the parameters of
//! [`Color::contrast_with`](crate::Color::contrast_with): how far apart two
//! colors' hsv values must be, and the bounds the adjusted value may not
//! cross.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use lazy_color::ContrastConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = ContrastConfig::from_json_file(Path::new("contrast.json"))?;
//!
//! // Or use defaults
//! let config = ContrastConfig::default();
//! # Ok::<(), lazy_color::ColorError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::hsv;
use crate::{ColorError, Result};

/// Parameters for pushing one color's brightness away from another's.
///
/// Missing fields in a JSON file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Minimum gap between the two hsv values
    pub difference: f64,

    /// Upper bound of a brightened value.
    /// Defaults to 360 for compatibility; 100 is the conventional maximum.
    pub value_ceiling: f64,

    /// Lower bound of a darkened value
    pub value_floor: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            difference: 20.0,
            value_ceiling: hsv::VALUE_CEILING,
            value_floor: hsv::VALUE_FLOOR,
        }
    }
}

impl ContrastConfig {
    /// Create a configuration with the given gap and default bounds
    pub fn with_difference(difference: f64) -> Self {
        Self {
            difference,
            ..Self::default()
        }
    }

    /// Check that the bounds are ordered and every field is finite
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("difference", self.difference),
            ("value_ceiling", self.value_ceiling),
            ("value_floor", self.value_floor),
        ] {
            if !value.is_finite() {
                return Err(ColorError::InvalidParameter {
                    parameter: parameter.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if self.value_floor > self.value_ceiling {
            return Err(ColorError::InvalidParameter {
                parameter: "value_floor".to_string(),
                value: format!("{} > value_ceiling {}", self.value_floor, self.value_ceiling),
            });
        }

        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
