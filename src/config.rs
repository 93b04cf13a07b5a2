use std::path::Path;

use thiserror::Error;

pub use crate::checksum::HashAlgorithm;

/// Only configuration version understood by this crate.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(String),
}

// Must compare equal wherever keys are expected to match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GroupingConfig {
    pub version: String,
    pub hash_algorithm: HashAlgorithm,
}

impl GroupingConfig {
    pub fn v0() -> Self {
        Self {
            version: CONFIG_VERSION.into(),
            hash_algorithm: HashAlgorithm::Md5,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GroupingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version.clone()));
        }
        Ok(())
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self::v0()
    }
}
