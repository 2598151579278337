//! Structured error types for catalog and config loading.
//!
//! These are designed to be displayable in both CLI and TUI contexts.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::DrugId;

/// Failures while reading or validating a drug catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate drug id {0}")]
    DuplicateId(DrugId),

    #[error("drug {id} has an empty name")]
    EmptyName { id: DrugId },

    #[error("drug {id} has a negative {field}: {value}")]
    NegativePrice {
        id: DrugId,
        field: &'static str,
        value: f64,
    },

    #[error("no drug with id {0}")]
    UnknownId(DrugId),
}

/// Failures while loading the tracker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
