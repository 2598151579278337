//! Drug catalog — the read-only record set behind every render.
//!
//! The built-in catalog is embedded TOML with one `[[drug]]` table per
//! record. A replacement catalog can be loaded from a TOML or JSON file.
//! Records are validated once at load and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{DrugId, DrugRecord};
use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../data/patents.toml");

/// On-disk layout shared by the TOML and JSON formats.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(rename = "drug", default)]
    drugs: Vec<DrugRecord>,
}

/// Ordered, validated, immutable collection of drug records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<DrugRecord>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Load a catalog file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        debug!(path = %path.display(), records = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::from_records(file.drugs)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_records(file.drugs)
    }

    /// Validate and wrap records, keeping their order.
    pub fn from_records(records: Vec<DrugRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        for rec in &records {
            if !seen.insert(rec.id) {
                return Err(CatalogError::DuplicateId(rec.id));
            }
            if rec.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { id: rec.id });
            }
            for (field, value) in [
                ("current_price", rec.current_price),
                ("estimated_generic_price", rec.estimated_generic_price),
            ] {
                if let Some(value) = value {
                    if value < 0.0 {
                        return Err(CatalogError::NegativePrice {
                            id: rec.id,
                            field,
                            value,
                        });
                    }
                }
            }
        }
        Ok(Self { records })
    }

    /// Serialize back to the TOML layout accepted by [`Catalog::from_toml`].
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&CatalogFile {
            drugs: self.records.clone(),
        })
    }

    pub fn records(&self) -> &[DrugRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: DrugId) -> Option<&DrugRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Like [`Catalog::get`] but reports unknown ids as an error.
    pub fn require(&self, id: DrugId) -> Result<&DrugRecord, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownId(id))
    }

    /// Earliest and latest expiration dates, if any records exist.
    pub fn expiration_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.patent_expiration).min()?;
        let max = self.records.iter().map(|r| r.patent_expiration).max()?;
        Some((min, max))
    }
}
