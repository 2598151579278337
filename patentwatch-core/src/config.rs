//! Tracker configuration, stored as TOML.
//!
//! ```toml
//! catalog = "/path/to/drugs.toml"
//! show_expired = false
//! initial_search = ""
//! log_filter = "info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CatalogError, ConfigError};
use crate::filter::SearchQuery;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Replacement catalog file. `None` uses the built-in catalog.
    pub catalog: Option<PathBuf>,
    /// Initial state of the show-expired toggle.
    pub show_expired: bool,
    /// Initial search text.
    pub initial_search: String,
    /// `tracing` filter directive, e.g. "info" or "patentwatch_core=debug".
    pub log_filter: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            show_expired: false,
            initial_search: String::new(),
            log_filter: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// `<config_dir>/patentwatch/config.toml`, falling back to the working directory.
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::from_toml(&content, path)?;
                debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// The configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::from_file(path),
            None => Catalog::builtin(),
        }
    }

    /// Starting page inputs.
    pub fn initial_query(&self) -> SearchQuery {
        SearchQuery::new(self.initial_search.clone(), self.show_expired)
    }
}

/// `<config_dir>/patentwatch`, shared with the TUI's state and log files.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("patentwatch")
}
