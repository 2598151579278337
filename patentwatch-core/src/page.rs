//! Page state — the search text and show-expired flag, plus a memoized view.
//!
//! The two inputs are private and change only through the setters. The
//! derived view is cached by (query, calendar date of `now`) and rebuilt
//! lazily on the next `view` call after any input changes.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::catalog::Catalog;
use crate::filter::SearchQuery;
use crate::view::{derive_view, TrackerView};

#[derive(Debug, Clone)]
struct Cached {
    query: SearchQuery,
    date: NaiveDate,
    view: TrackerView,
}

/// The tracker page: an immutable catalog and the user's two inputs.
#[derive(Debug, Clone)]
pub struct TrackerPage {
    catalog: Catalog,
    query: SearchQuery,
    cache: Option<Cached>,
}

impl TrackerPage {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_query(catalog, SearchQuery::default())
    }

    pub fn with_query(catalog: Catalog, query: SearchQuery) -> Self {
        Self {
            catalog,
            query,
            cache: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn search_text(&self) -> &str {
        &self.query.text
    }

    pub fn show_expired(&self) -> bool {
        self.query.show_expired
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.query.text.push(c);
    }

    pub fn pop_search_char(&mut self) -> Option<char> {
        self.query.text.pop()
    }

    pub fn clear_search(&mut self) {
        self.query.text.clear();
    }

    pub fn set_show_expired(&mut self, show: bool) {
        self.query.show_expired = show;
    }

    pub fn toggle_show_expired(&mut self) -> bool {
        self.query.show_expired = !self.query.show_expired;
        self.query.show_expired
    }

    /// Current view, recomputed only when the query or date changed.
    pub fn view(&mut self, now: NaiveDateTime) -> &TrackerView {
        let date = now.date();
        let stale = self
            .cache
            .as_ref()
            .map_or(true, |c| c.query != self.query || c.date != date);
        if stale {
            self.cache = None;
        }
        let catalog = &self.catalog;
        let query = &self.query;
        &self
            .cache
            .get_or_insert_with(|| {
                trace!(?query, %date, "recomputing tracker view");
                Cached {
                    query: query.clone(),
                    date,
                    view: derive_view(catalog.records(), query, now),
                }
            })
            .view
    }

    /// Whether the next `view(now)` call will reuse the cached result.
    pub fn is_cached_for(&self, now: NaiveDateTime) -> bool {
        self.cache
            .as_ref()
            .is_some_and(|c| c.query == self.query && c.date == now.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn page() -> TrackerPage {
        TrackerPage::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn typing_narrows_results() {
        let mut page = page();
        page.set_show_expired(true);
        let all = page.view(now()).matched;
        for c in "xarel".chars() {
            page.push_search_char(c);
        }
        assert_eq!(page.search_text(), "xarel");
        let view = page.view(now());
        assert_eq!(view.matched, 1);
        assert!(view.matched < all);
    }

    #[test]
    fn backspace_and_clear() {
        let mut page = page();
        page.set_search_text("ab");
        assert_eq!(page.pop_search_char(), Some('b'));
        assert_eq!(page.search_text(), "a");
        page.clear_search();
        assert_eq!(page.search_text(), "");
        assert_eq!(page.pop_search_char(), None);
    }

    #[test]
    fn toggle_reveals_expired() {
        let mut page = page();
        assert!(!page.show_expired());
        let hidden = page.view(now()).matched;
        assert!(page.toggle_show_expired());
        let shown = page.view(now()).matched;
        assert!(shown > hidden);
        assert!(!page.toggle_show_expired());
    }

    #[test]
    fn view_is_memoized_by_query_and_date() {
        let mut page = page();
        assert!(!page.is_cached_for(now()));
        page.view(now());
        assert!(page.is_cached_for(now()));

        // Same day, later time: still cached.
        let later = now().date().and_hms_opt(18, 0, 0).unwrap();
        assert!(page.is_cached_for(later));

        page.push_search_char('h');
        assert!(!page.is_cached_for(now()));
        page.view(now());
        assert!(page.is_cached_for(now()));

        let tomorrow = now() + chrono::Duration::days(1);
        assert!(!page.is_cached_for(tomorrow));
    }
}
