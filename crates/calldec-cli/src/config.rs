//! CLI configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use calldec_abi::DecodeOptions;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Decode `int<N>` with its declared bit width instead of the
    /// compatibility default of 256 bits
    #[serde(default)]
    pub declared_int_width: bool,
    /// Maximum type nesting depth
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    DecodeOptions::DEFAULT_MAX_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            declared_int_width: false,
            max_depth: default_max_depth(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".calldec"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load config from file or return default
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    std::fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Cannot determine config path")
        })?;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

        std::fs::write(path, content)
    }

    /// Decode options derived from this configuration
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            declared_int_width: self.declared_int_width,
            max_depth: self.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.declared_int_width);
        assert_eq!(config.max_depth, DecodeOptions::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("declared_int_width"));
        assert!(toml.contains("max_depth"));
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            declared_int_width = true
            max_depth = 8
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(config.declared_int_width);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.declared_int_width);
        assert_eq!(config.max_depth, DecodeOptions::DEFAULT_MAX_DEPTH);
    }
}
