//! Drug record — the single entity of the tracker.
//!
//! One schema covers both kinds of catalog entry: market records carrying
//! price and savings estimates, and plain records carrying a description.
//! Everything past `id`, `name` and `patent_expiration` is optional.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Stable record identifier, unique within a catalog.
pub type DrugId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecord {
    pub id: DrugId,
    /// Brand name.
    pub name: String,
    /// Non-brand (INN) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,
    /// Date the patent protection ends.
    pub patent_expiration: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indication: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_generic_price: Option<f64>,
    /// Free text such as "70-85%".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_savings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub significance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DrugRecord {
    /// Minimal record; the remaining fields start empty.
    pub fn new(id: DrugId, name: impl Into<String>, patent_expiration: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            generic_name: None,
            patent_expiration,
            indication: None,
            category: None,
            manufacturer: None,
            current_price: None,
            estimated_generic_price: None,
            estimated_savings: None,
            significance: None,
            status: None,
            description: None,
        }
    }

    pub fn with_generic_name(mut self, generic_name: impl Into<String>) -> Self {
        self.generic_name = Some(generic_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Calendar year used as the grouping key.
    pub fn expiration_year(&self) -> i32 {
        self.patent_expiration.year()
    }

    /// The instant protection ends: midnight at the start of the expiration date.
    pub fn expires_at(&self) -> NaiveDateTime {
        self.patent_expiration.and_time(NaiveTime::MIN)
    }

    /// True once `now` is strictly past the expiration instant.
    pub fn is_expired(&self, now: NaiveDateTime) -> bool {
        self.expires_at() < now
    }

    /// Line shown under the brand name: the generic name, else the description.
    pub fn secondary_label(&self) -> Option<&str> {
        self.generic_name
            .as_deref()
            .or(self.description.as_deref())
    }

    /// Category then indication, skipping whichever is absent.
    pub fn tags(&self) -> Vec<&str> {
        [self.category.as_deref(), self.indication.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn expiration_year_from_date() {
        let rec = DrugRecord::new(1, "Humira", date(2024, 1, 31));
        assert_eq!(rec.expiration_year(), 2024);
    }

    #[test]
    fn expired_only_after_midnight() {
        let rec = DrugRecord::new(1, "Humira", date(2024, 1, 31));
        assert!(!rec.is_expired(date(2024, 1, 31).and_time(NaiveTime::MIN)));
        assert!(rec.is_expired(date(2024, 1, 31).and_hms_opt(0, 0, 1).unwrap()));
        assert!(!rec.is_expired(date(2023, 12, 31).and_hms_opt(23, 59, 59).unwrap()));
    }

    #[test]
    fn secondary_label_prefers_generic_name() {
        let rec = DrugRecord::new(1, "Humira", date(2024, 1, 31))
            .with_generic_name("adalimumab")
            .with_description("anti-TNF");
        assert_eq!(rec.secondary_label(), Some("adalimumab"));

        let rec = DrugRecord::new(2, "Opdivo", date(2028, 5, 3)).with_description("PD-1");
        assert_eq!(rec.secondary_label(), Some("PD-1"));

        let rec = DrugRecord::new(3, "Bare", date(2028, 5, 3));
        assert_eq!(rec.secondary_label(), None);
    }

    #[test]
    fn tags_skip_missing_fields() {
        let mut rec = DrugRecord::new(1, "Humira", date(2024, 1, 31));
        assert!(rec.tags().is_empty());
        rec.indication = Some("Rheumatoid Arthritis".into());
        assert_eq!(rec.tags(), vec!["Rheumatoid Arthritis"]);
        rec.category = Some("Immunology".into());
        assert_eq!(rec.tags(), vec!["Immunology", "Rheumatoid Arthritis"]);
    }

    #[test]
    fn deserializes_with_optional_fields_absent() {
        let json = r#"{"id": 7, "name": "Eliquis", "patent_expiration": "2028-04-01"}"#;
        let rec: DrugRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec, DrugRecord::new(7, "Eliquis", date(2028, 4, 1)));
    }

    #[test]
    fn rejects_malformed_date() {
        let json = r#"{"id": 7, "name": "Eliquis", "patent_expiration": "2028-13-01"}"#;
        assert!(serde_json::from_str::<DrugRecord>(json).is_err());
    }
}
