//! Property tests for the search pipeline.
//!
//! Uses proptest to verify:
//! 1. Containment — every result matches, every non-result (unexpired) does not
//! 2. Idempotence — filtering a filtered sequence changes nothing
//! 3. Partition — grouping loses and duplicates nothing
//! 4. Ordering — year keys match members and strictly ascend
//! 5. Months-until is never negative

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use std::collections::HashSet;

use patentwatch_core::filter::{filter_records, matches_text, SearchQuery};
use patentwatch_core::grouping::group_by_year;
use patentwatch_core::timeline::months_until;
use patentwatch_core::DrugRecord;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2010..2040_i32, 1..=12_u32, 1..=28_u32)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_now() -> impl Strategy<Value = NaiveDateTime> {
    (arb_date(), 0..24_u32, 0..60_u32).prop_map(|(d, h, m)| d.and_hms_opt(h, m, 0).unwrap())
}

fn arb_records() -> impl Strategy<Value = Vec<DrugRecord>> {
    prop::collection::vec(
        ("[A-Za-z]{1,10}", prop::option::of("[a-z]{3,12}"), arb_date()),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, generic, date))| {
                let rec = DrugRecord::new(i as u32, name, date);
                match generic {
                    Some(g) => rec.with_generic_name(g),
                    None => rec,
                }
            })
            .collect()
    })
}

fn arb_query() -> impl Strategy<Value = SearchQuery> {
    ("[A-Za-z]{0,3}", any::<bool>()).prop_map(|(text, show)| SearchQuery::new(text, show))
}

fn ids(records: &[&DrugRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

// ── 1. Containment ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn results_contain_query(data in arb_records(), query in arb_query(), now in arb_now()) {
        let out = filter_records(&data, &query, now);
        let needle = query.text.to_lowercase();
        for rec in &out {
            let in_name = rec.name.to_lowercase().contains(&needle);
            let in_generic = rec
                .generic_name
                .as_deref()
                .is_some_and(|g| g.to_lowercase().contains(&needle));
            prop_assert!(in_name || in_generic);
            prop_assert!(query.show_expired || !rec.is_expired(now));
        }

        let kept: HashSet<u32> = ids(&out).into_iter().collect();
        for rec in &data {
            if !kept.contains(&rec.id) {
                let visible = query.show_expired || !rec.is_expired(now);
                prop_assert!(!(visible && matches_text(rec, &query.text)));
            }
        }
    }

    // ── 2. Idempotence ───────────────────────────────────────────────

    #[test]
    fn filter_is_idempotent(data in arb_records(), query in arb_query(), now in arb_now()) {
        let once = filter_records(&data, &query, now);
        let twice = filter_records(once.iter().copied(), &query, now);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    // ── 3. Partition ─────────────────────────────────────────────────

    #[test]
    fn grouping_partitions(data in arb_records(), query in arb_query(), now in arb_now()) {
        let filtered = filter_records(&data, &query, now);
        let groups = group_by_year(&filtered);

        let mut seen = HashSet::new();
        for (_, recs) in groups.iter() {
            for rec in recs {
                prop_assert!(seen.insert(rec.id), "record {} in two buckets", rec.id);
            }
        }
        let expected: HashSet<u32> = ids(&filtered).into_iter().collect();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(groups.record_count(), filtered.len());
    }

    // ── 4. Ordering ──────────────────────────────────────────────────

    #[test]
    fn buckets_keyed_and_ascending(data in arb_records()) {
        let refs: Vec<&DrugRecord> = data.iter().collect();
        let groups = group_by_year(&refs);
        let years = groups.years();
        prop_assert!(years.windows(2).all(|w| w[0] < w[1]));
        for (year, recs) in groups.iter() {
            prop_assert!(!recs.is_empty());
            for rec in recs {
                prop_assert_eq!(rec.expiration_year(), year);
            }
            // Stable within a bucket.
            let bucket_ids = ids(recs);
            let mut sorted = bucket_ids.clone();
            sorted.sort_unstable();
            prop_assert_eq!(bucket_ids, sorted);
        }
    }

    // ── 5. Months-until ──────────────────────────────────────────────

    #[test]
    fn months_until_never_negative(date in arb_date(), now in arb_now()) {
        let months = months_until(date, now);
        if date.and_hms_opt(0, 0, 0).unwrap() <= now {
            prop_assert_eq!(months, 0);
        }
    }
}
