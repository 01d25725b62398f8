//! Search layer configuration
//!
//! Runtime knobs for the search façade and the formatting layer, loaded
//! from and saved to JSON files.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Runtime parameters for the search layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result cap applied when a request does not carry its own
    pub default_limit: Option<usize>,
    /// Decimal places used when rendering kilometer distances
    pub display_precision: u8,
    /// Smallest span a fitted map region may report (meters)
    pub min_region_span_meters: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: None,
            display_precision: 1,
            min_region_span_meters: 50.0,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Parameter value the search layer cannot work with
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    /// Configuration file I/O error
    Io { message: String },
    /// JSON serialization or deserialization error
    Serialization { message: String },
}

impl SearchConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: SearchConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Serialization {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::Io {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Reject parameter values the search layer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_limit == Some(0) {
            // A standing cap of zero would blank every search
            return Err(ConfigError::InvalidParameter {
                parameter: "default_limit".to_string(),
                value: "0".to_string(),
                reason: "A default result cap must be at least 1".to_string(),
            });
        }

        if !self.min_region_span_meters.is_finite() || self.min_region_span_meters <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "min_region_span_meters".to_string(),
                value: self.min_region_span_meters.to_string(),
                reason: "Region span floor must be a positive distance".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::Io { message } => write!(f, "I/O error: {}", message),
            ConfigError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.default_limit, None);
        assert_eq!(config.display_precision, 1);
        assert_eq!(config.min_region_span_meters, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_default_limit_is_rejected() {
        let config = SearchConfig {
            default_limit: Some(0),
            ..Default::default()
        };

        match config.validate() {
            Err(ConfigError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "default_limit");
            }
            other => panic!("expected invalid parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_span_floor_is_rejected() {
        let config = SearchConfig {
            min_region_span_meters: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SearchConfig {
            min_region_span_meters: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let config = SearchConfig {
            default_limit: Some(5),
            display_precision: 2,
            min_region_span_meters: 120.0,
        };

        let temp_path = PathBuf::from("test_search_config.json");
        config.save_to_file(&temp_path).unwrap();
        let loaded = SearchConfig::from_file(&temp_path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_file(temp_path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        match SearchConfig::from_file("no_such_config.json") {
            Err(ConfigError::Io { .. }) => {}
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let temp_path = PathBuf::from("test_bad_config.json");
        fs::write(&temp_path, "not json at all").unwrap();

        match SearchConfig::from_file(&temp_path) {
            Err(ConfigError::Serialization { .. }) => {}
            other => panic!("expected serialization error, got {:?}", other),
        }

        let _ = fs::remove_file(temp_path);
    }
}
