//! Engine configuration, read from a TOML file such as `exhibit.toml`.
//!
//! ```toml
//! delegate_options = "inherit"
//! collection_flag = "collection"
//! ```

use std::path::Path;

use exhibit_types::Options;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Options handed to a delegated representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegateOptions {
    #[default]
    /// The delegate starts from an empty options context.
    Empty,
    /// The delegate receives the parent's merge context, without the collection flag.
    Inherit,
}

/// Configuration for an [`crate::EntityType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepresentConfig {
    pub delegate_options: DelegateOptions,
    /// Options key set to `true` on every entity built from a sequence.
    pub collection_flag: String,
}

fn default_collection_flag() -> String {
    "collection".to_string()
}

impl Default for RepresentConfig {
    fn default() -> Self {
        Self {
            delegate_options: DelegateOptions::Empty,
            collection_flag: default_collection_flag(),
        }
    }
}

impl RepresentConfig {
    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), delegate_options = ?config.delegate_options, "Loaded representation config");
        Ok(config)
    }

    /// Options for a delegated representation built under `context`.
    pub(crate) fn delegate_context(&self, context: &Options) -> Options {
        match self.delegate_options {
            DelegateOptions::Empty => Options::new(),
            DelegateOptions::Inherit => {
                let mut inherited = context.clone();
                inherited.remove(&self.collection_flag);
                inherited
            }
        }
    }
}
