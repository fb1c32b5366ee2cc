//! Engine configuration types.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column used as the load (x) when none is configured.
pub const DEFAULT_INDEPENDENT: &str = "log generation";

/// Metrics fitted against the load when none are configured.
pub const DEFAULT_TARGETS: [&str; 5] = ["RX", "TX", "Read", "Write", "CPU load"];

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(String),

    /// Config file is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// Config is well-formed but unusable
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Which columns the prediction engine fits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Independent-variable (load) column name
    pub independent: String,
    /// Target metric column names, in display order
    pub targets: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            independent: DEFAULT_INDEPENDENT.to_string(),
            targets: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl EngineConfig {
    /// Create a new engine configuration.
    pub fn new(independent: &str, targets: &[&str]) -> Self {
        Self {
            independent: independent.to_string(),
            targets: targets.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config: Self =
            serde_json::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration names an independent column and at least one target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.independent.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "independent column name is empty".to_string(),
            ));
        }
        if self.targets.is_empty() {
            return Err(ConfigError::Invalid("no target metrics".to_string()));
        }
        Ok(())
    }
}

/// Builder for EngineConfig.
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    base: Option<EngineConfig>,
    independent: Option<String>,
    targets: Vec<String>,
}

impl EngineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration instead of the defaults.
    pub fn base(mut self, config: EngineConfig) -> Self {
        self.base = Some(config);
        self
    }

    /// Set the independent-variable column.
    pub fn independent(mut self, name: &str) -> Self {
        self.independent = Some(name.to_string());
        self
    }

    /// Add a target metric. Targets given here replace the base list.
    pub fn target(mut self, name: &str) -> Self {
        self.targets.push(name.to_string());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let mut config = self.base.unwrap_or_default();
        if let Some(independent) = self.independent {
            config.independent = independent;
        }
        if !self.targets.is_empty() {
            config.targets = self.targets;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.independent, "log generation");
        assert_eq!(config.targets, vec!["RX", "TX", "Read", "Write", "CPU load"]);
    }

    #[test]
    fn test_builder_overrides_base() {
        let base = EngineConfig::new("load", &["a", "b"]);
        let config = EngineConfigBuilder::new()
            .base(base)
            .target("c")
            .build()
            .unwrap();

        assert_eq!(config.independent, "load");
        assert_eq!(config.targets, vec!["c"]);
    }

    #[test]
    fn test_builder_keeps_default_targets() {
        let config = EngineConfigBuilder::new()
            .independent("requests")
            .build()
            .unwrap();

        assert_eq!(config.independent, "requests");
        assert_eq!(config.targets.len(), 5);
    }

    #[test]
    fn test_builder_rejects_empty_independent() {
        let result = EngineConfigBuilder::new().independent("  ").build();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_json_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"targets": ["CPU load"]}}"#).unwrap();

        let config = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.independent, "log generation");
        assert_eq!(config.targets, vec!["CPU load"]);
    }

    #[test]
    fn test_from_json_file_rejects_empty_targets() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"independent": "x", "targets": []}}"#).unwrap();

        let result = EngineConfig::from_json_file(file.path());
        assert_eq!(
            result,
            Err(ConfigError::Invalid("no target metrics".to_string()))
        );
    }

    #[test]
    fn test_from_json_file_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let result = EngineConfig::from_json_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = EngineConfig::from_json_file(Path::new("/nonexistent/loadcurve.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
