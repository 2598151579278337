//! Derivation pipeline: catalog + query → filtered → grouped → cards.
//!
//! `derive_view` is a pure function of its inputs. The output owns its data so
//! it can be cached by [`crate::page::TrackerPage`] and serialized by the CLI.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::{DrugId, DrugRecord};
use crate::filter::{count_hidden_expired, filter_records, SearchQuery};
use crate::format::long_date;
use crate::grouping::group_by_year;
use crate::timeline::record_months_until;

/// Everything a card shows for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: DrugId,
    pub name: String,
    /// Generic name, else description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Category and indication.
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    pub patent_expiration: NaiveDate,
    /// Long-form expiration date for display.
    pub expires_on: String,
    pub months_until: u32,
    pub expired: bool,
}

impl Card {
    pub fn from_record(record: &DrugRecord, now: NaiveDateTime) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            secondary: record.secondary_label().map(str::to_string),
            tags: record.tags().into_iter().map(str::to_string).collect(),
            manufacturer: record.manufacturer.clone(),
            patent_expiration: record.patent_expiration,
            expires_on: long_date(record.patent_expiration),
            months_until: record_months_until(record, now),
            expired: record.is_expired(now),
        }
    }
}

/// One year heading and its cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearSection {
    pub year: i32,
    pub cards: Vec<Card>,
}

/// The rendered page content for one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackerView {
    /// Ascending by year.
    pub sections: Vec<YearSection>,
    /// Records in the catalog.
    pub total: usize,
    /// Records that passed both filters.
    pub matched: usize,
    /// Text matches dropped by the show-expired toggle.
    pub hidden_expired: usize,
}

impl TrackerView {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Cards in display order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.sections.iter().flat_map(|s| s.cards.iter())
    }

    /// Card at a flat display index.
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.cards().nth(index)
    }
}

/// Run filter → group → card building over `records`.
pub fn derive_view(records: &[DrugRecord], query: &SearchQuery, now: NaiveDateTime) -> TrackerView {
    let filtered = filter_records(records, query, now);
    let groups = group_by_year(&filtered);
    let sections = groups
        .iter()
        .map(|(year, recs)| YearSection {
            year,
            cards: recs.iter().map(|r| Card::from_record(r, now)).collect(),
        })
        .collect();

    TrackerView {
        sections,
        total: records.len(),
        matched: filtered.len(),
        hidden_expired: count_hidden_expired(records, query, now),
    }
}
