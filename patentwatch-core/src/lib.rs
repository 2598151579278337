//! PatentWatch Core — drug records, catalog, search pipeline, page state.
//!
//! This crate holds everything the terminal page and the CLI share:
//! - The `DrugRecord` model and the validated, read-only `Catalog`
//! - Case-insensitive search plus the show-expired filter
//! - Grouping of filtered records by expiration year (always ascending)
//! - The months-until approximation and display formatting
//! - `TrackerPage`, the page state with memoized derivation
//! - `TrackerConfig`, loaded from TOML

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod format;
pub mod grouping;
pub mod page;
pub mod timeline;
pub mod view;

pub use catalog::Catalog;
pub use config::TrackerConfig;
pub use domain::{DrugId, DrugRecord};
pub use error::{CatalogError, ConfigError};
pub use filter::{filter_records, SearchQuery};
pub use grouping::{group_by_year, YearGroups};
pub use page::TrackerPage;
pub use timeline::months_until;
pub use view::{derive_view, Card, TrackerView, YearSection};
