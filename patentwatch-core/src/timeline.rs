//! Months-until approximation.
//!
//! Uses an average month of 30.44 days. Expired patents clamp to zero, so a
//! patent that lapsed last year and one lapsing today both read "0"; callers
//! that need the distinction check [`DrugRecord::is_expired`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::DrugRecord;

/// Average days per month used by the approximation.
pub const AVG_DAYS_PER_MONTH: f64 = 30.44;

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Whole months from `now` until midnight of `expiration`, never negative.
pub fn months_until(expiration: NaiveDate, now: NaiveDateTime) -> u32 {
    let diff_ms = (expiration.and_time(NaiveTime::MIN) - now).num_milliseconds() as f64;
    let months = (diff_ms / (MS_PER_DAY * AVG_DAYS_PER_MONTH)).round();
    if months <= 0.0 {
        0
    } else {
        months as u32
    }
}

/// [`months_until`] for a record's patent expiration.
pub fn record_months_until(record: &DrugRecord, now: NaiveDateTime) -> u32 {
    months_until(record.patent_expiration, now)
}
