//! YAML configuration file support for Recovr
//!
//! Loads the store and matching settings from a single YAML file so the
//! matcher can be assembled without touching code.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Recovr Configuration
//! version: "1.0"
//! name: "campus desk"
//!
//! store:
//!   backend: "seeded"
//!   seed_path: "data/items.json"
//!
//! matching:
//!   match_threshold: 0.4
//!   max_suggestions: 10
//!   max_item_matches: 5
//!   weights:
//!     category: 0.25
//!     name: 0.10
//!     location: 0.25
//!     date: 0.15
//!     description: 0.20
//!   related_category_keywords: ["BAG", "BOOK"]
//! ```

use std::fs;
use std::path::Path;

use items::StoreConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RecovrConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Item store selection
    #[serde(default)]
    pub store: StoreYamlConfig,

    /// Matching policy
    #[serde(default)]
    pub matching: MatchConfig,
}

impl RecovrConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: RecovrConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.store.validate()?;
        self.matching
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        Ok(())
    }

    /// Matching policy for [`matcher::Matcher::new`].
    pub fn match_config(&self) -> MatchConfig {
        self.matching.clone()
    }

    /// Store selection for [`items::StoreConfig::build`].
    pub fn store_config(&self) -> StoreConfig {
        match (&self.store.backend, &self.store.seed_path) {
            (StoreBackend::Seeded, Some(path)) => StoreConfig::seeded(path.clone()),
            _ => StoreConfig::in_memory(),
        }
    }
}

impl Default for RecovrConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            store: StoreYamlConfig::default(),
            matching: MatchConfig::default(),
        }
    }
}

/// Which item store to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    InMemory,
    Seeded,
}

/// Store YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreYamlConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// JSON array of items; required by the `seeded` backend
    #[serde(default)]
    pub seed_path: Option<String>,
}

impl StoreYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match (self.backend, self.seed_path.as_deref()) {
            (StoreBackend::Seeded, None) => {
                Err(ConfigLoadError::MissingField("store.seed_path".to_string()))
            }
            (StoreBackend::Seeded, Some(path)) if path.trim().is_empty() => Err(
                ConfigLoadError::Validation("store.seed_path must not be blank".to_string()),
            ),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matching:
  match_threshold: 0.5
  weights:
    name: 0.3
"#;

        let config = RecovrConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.matching.match_threshold, 0.5);
        assert_eq!(config.matching.weights.name, 0.3);
        assert_eq!(config.matching.weights.location, 0.25);
        assert_eq!(config.store_config(), StoreConfig::in_memory());
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
store:
  backend: "seeded"
  seed_path: "data/items.json"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = RecovrConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.store_config(), StoreConfig::seeded("data/items.json"));
        assert_eq!(config.match_config(), MatchConfig::default());
    }

    #[test]
    fn test_default_config() {
        let config = RecovrConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.store.backend, StoreBackend::InMemory);
    }

    #[test]
    fn test_unsupported_version() {
        let result = RecovrConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_matching_validation() {
        let yaml = r#"
version: "1.0"
matching:
  match_threshold: 1.5
"#;

        let result = RecovrConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("match_threshold"));
    }

    #[test]
    fn test_seeded_store_requires_path() {
        let yaml = r#"
version: "1.0"
store:
  backend: "seeded"
"#;

        let result = RecovrConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::MissingField(_))));
    }
}
