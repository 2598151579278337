//! Test helpers for building app state at a fixed instant

use chrono::{NaiveDate, NaiveDateTime};

use patentwatch_core::{Catalog, TrackerPage};

use crate::app::AppState;

/// 2025-01-01 12:00 — Humira, Xarelto and Lyrica are expired at this point.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn app_at(now: NaiveDateTime) -> AppState {
    let catalog = Catalog::builtin().expect("built-in catalog");
    AppState::new(TrackerPage::new(catalog), now)
}
