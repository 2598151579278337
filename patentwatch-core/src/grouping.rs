//! Year grouping — buckets filtered records by expiration year.
//!
//! Buckets iterate in ascending year order; records inside a bucket keep the
//! order they had in the filtered sequence.

use std::collections::BTreeMap;

use crate::domain::DrugRecord;

/// Filtered records partitioned by expiration year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearGroups<'a> {
    buckets: BTreeMap<i32, Vec<&'a DrugRecord>>,
}

impl<'a> YearGroups<'a> {
    /// `(year, records)` pairs, ascending by year.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[&'a DrugRecord])> + '_ {
        self.buckets.iter().map(|(year, recs)| (*year, recs.as_slice()))
    }

    pub fn years(&self) -> Vec<i32> {
        self.buckets.keys().copied().collect()
    }

    pub fn get(&self, year: i32) -> Option<&[&'a DrugRecord]> {
        self.buckets.get(&year).map(|v| v.as_slice())
    }

    /// Number of year buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Records across all buckets.
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Partition records into year buckets.
pub fn group_by_year<'a>(records: &[&'a DrugRecord]) -> YearGroups<'a> {
    let mut buckets: BTreeMap<i32, Vec<&'a DrugRecord>> = BTreeMap::new();
    for &rec in records {
        buckets.entry(rec.expiration_year()).or_default().push(rec);
    }
    YearGroups { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(id: u32, y: i32, m: u32) -> DrugRecord {
        DrugRecord::new(id, format!("drug{id}"), NaiveDate::from_ymd_opt(y, m, 1).unwrap())
    }

    #[test]
    fn years_ascend_regardless_of_input_order() {
        let data = vec![rec(1, 2028, 1), rec(2, 2024, 5), rec(3, 2026, 3)];
        let refs: Vec<&DrugRecord> = data.iter().collect();
        let groups = group_by_year(&refs);
        assert_eq!(groups.years(), vec![2024, 2026, 2028]);
    }

    #[test]
    fn order_within_year_is_stable() {
        let data = vec![rec(1, 2024, 9), rec(2, 2024, 1), rec(3, 2024, 5)];
        let refs: Vec<&DrugRecord> = data.iter().collect();
        let groups = group_by_year(&refs);
        let ids: Vec<u32> = groups.get(2024).unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_input_gives_no_buckets() {
        let groups = group_by_year(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.record_count(), 0);
    }

    #[test]
    fn iter_orders_by_year_then_input() {
        let data = vec![rec(1, 2026, 1), rec(2, 2024, 1), rec(3, 2026, 2), rec(4, 2024, 2)];
        let refs: Vec<&DrugRecord> = data.iter().collect();
        let groups = group_by_year(&refs);
        let ids: Vec<u32> = groups
            .iter()
            .flat_map(|(_, recs)| recs.iter().map(|r| r.id))
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert_eq!(groups.record_count(), 4);
        assert_eq!(groups.len(), 2);
    }
}
