//! Search and expiration filtering.
//!
//! A record passes when its brand or generic name contains the search text
//! (case-insensitive) AND it is either unexpired or expired records are shown.
//! Output order always follows input order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::DrugRecord;

/// The page's two inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    pub show_expired: bool,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, show_expired: bool) -> Self {
        Self {
            text: text.into(),
            show_expired,
        }
    }
}

/// Case-insensitive substring match on name or generic name.
///
/// An empty `text` matches every record.
pub fn matches_text(record: &DrugRecord, text: &str) -> bool {
    matches_lowered(record, &text.to_lowercase())
}

fn matches_lowered(record: &DrugRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle)
        || record
            .generic_name
            .as_deref()
            .is_some_and(|g| g.to_lowercase().contains(needle))
}

/// True if the record survives the show-expired toggle at `now`.
pub fn passes_expiration(record: &DrugRecord, show_expired: bool, now: NaiveDateTime) -> bool {
    show_expired || !record.is_expired(now)
}

/// Apply both filters, preserving input order.
pub fn filter_records<'a, I>(records: I, query: &SearchQuery, now: NaiveDateTime) -> Vec<&'a DrugRecord>
where
    I: IntoIterator<Item = &'a DrugRecord>,
{
    let needle = query.text.to_lowercase();
    records
        .into_iter()
        .filter(|r| matches_lowered(r, &needle))
        .filter(|r| passes_expiration(r, query.show_expired, now))
        .collect()
}

/// Number of records that match the text but are hidden because they expired.
pub fn count_hidden_expired<'a, I>(records: I, query: &SearchQuery, now: NaiveDateTime) -> usize
where
    I: IntoIterator<Item = &'a DrugRecord>,
{
    if query.show_expired {
        return 0;
    }
    let needle = query.text.to_lowercase();
    records
        .into_iter()
        .filter(|r| matches_lowered(r, &needle) && r.is_expired(now))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDateTime {
        date(2023, 6, 1).and_hms_opt(12, 0, 0).unwrap()
    }

    fn sample() -> Vec<DrugRecord> {
        vec![
            DrugRecord::new(1, "Humira", date(2024, 1, 31)).with_generic_name("adalimumab"),
            DrugRecord::new(2, "Xarelto", date(2024, 9, 30)).with_generic_name("rivaroxaban"),
            DrugRecord::new(3, "Lyrica", date(2019, 6, 30)).with_generic_name("pregabalin"),
            DrugRecord::new(4, "Opdivo", date(2028, 5, 3)).with_description("nivolumab biosimilar"),
        ]
    }

    fn ids(records: &[&DrugRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_text_matches_all_when_showing_expired() {
        let data = sample();
        let out = filter_records(&data, &SearchQuery::new("", true), now());
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let data = sample();
        let out = filter_records(&data, &SearchQuery::new("hUmI", true), now());
        assert_eq!(ids(&out), vec![1]);
    }

    #[test]
    fn generic_name_matches() {
        let data = sample();
        let out = filter_records(&data, &SearchQuery::new("RIVAROX", true), now());
        assert_eq!(ids(&out), vec![2]);
    }

    #[test]
    fn description_is_not_searched() {
        let data = sample();
        let out = filter_records(&data, &SearchQuery::new("nivolumab", true), now());
        assert!(out.is_empty());
    }

    #[test]
    fn expired_hidden_unless_shown() {
        let data = sample();
        let hidden = filter_records(&data, &SearchQuery::new("", false), now());
        assert_eq!(ids(&hidden), vec![1, 2, 4]);
        let shown = filter_records(&data, &SearchQuery::new("", true), now());
        assert!(shown.iter().any(|r| r.id == 3));
    }

    #[test]
    fn filters_combine_with_and() {
        let data = sample();
        let out = filter_records(&data, &SearchQuery::new("lyrica", false), now());
        assert!(out.is_empty());
        assert_eq!(count_hidden_expired(&data, &SearchQuery::new("lyrica", false), now()), 1);
        assert_eq!(count_hidden_expired(&data, &SearchQuery::new("lyrica", true), now()), 0);
        assert_eq!(count_hidden_expired(&data, &SearchQuery::new("humira", false), now()), 0);
    }

    #[test]
    fn no_match_yields_empty() {
        let data = sample();
        let out = filter_records(&data, &SearchQuery::new("xyz-nonexistent", true), now());
        assert!(out.is_empty());
    }

    #[test]
    fn refiltering_borrowed_output() {
        let data = sample();
        let q = SearchQuery::new("a", false);
        let once = filter_records(&data, &q, now());
        let twice = filter_records(once.iter().copied(), &q, now());
        assert_eq!(ids(&once), ids(&twice));
    }
}
