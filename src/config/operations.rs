//! Config loading, validation, and lookup.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{CheckError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(CheckError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            CheckError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Find the config to use for a repository.
    ///
    /// An explicit path must exist. Otherwise `.commitcheck.yaml` at the
    /// repository root is used when present, and the defaults when not.
    pub fn resolve<P: AsRef<Path>>(repo_root: P, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("loading config from {}", path.display());
            return Self::load(path);
        }

        let default_path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            log::debug!("loading config from {}", default_path.display());
            Self::load(&default_path)
        } else {
            log::debug!("no {} found, using built-in defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| CheckError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    #[cfg(test)]
    pub(crate) fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| CheckError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `patterns` entries must have a non-empty `pattern`
    /// - explicit pattern names must be non-empty
    /// - `ignores` and `checks` entries must be non-empty
    ///
    /// Regex syntax is checked when the patterns are compiled.
    pub fn validate(&self) -> Result<()> {
        for (index, spec) in self.patterns.iter().enumerate() {
            if spec.pattern.is_empty() {
                return Err(CheckError::Config(format!(
                    "config validation failed: patterns[{}] has an empty pattern",
                    index
                )));
            }
            if spec.name.as_deref() == Some("") {
                return Err(CheckError::Config(format!(
                    "config validation failed: patterns[{}] has an empty name. Remove the name to use P{:03}.",
                    index, index
                )));
            }
        }

        for (field, list) in [("ignores", &self.ignores), ("checks", &self.checks)] {
            if list.iter().any(|p| p.is_empty()) {
                return Err(CheckError::Config(format!(
                    "config validation failed: {} entries must be non-empty",
                    field
                )));
            }
        }

        Ok(())
    }
}
