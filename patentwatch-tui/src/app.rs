//! Application state — single-owner, main-thread only.
//!
//! The page (search text + show-expired flag) lives in `TrackerPage`; this
//! adds the terminal concerns: input mode, selection, overlays, status line.

use chrono::NaiveDateTime;

use patentwatch_core::{DrugId, TrackerPage, TrackerView};

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate and toggle.
    Browse,
    /// Keys edit the search text.
    Search,
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Help,
    Detail(DrugId),
}

/// Top-level application state.
pub struct AppState {
    pub page: TrackerPage,
    /// Derived content for the current query, refreshed after every change.
    pub view: TrackerView,
    /// Reference time for expiry and months-until.
    pub now: NaiveDateTime,

    pub mode: InputMode,
    pub overlay: Overlay,
    /// Flat index of the selected card in display order.
    pub cursor: usize,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(page: TrackerPage, now: NaiveDateTime) -> Self {
        let mut app = Self {
            page,
            view: TrackerView::default(),
            now,
            mode: InputMode::Browse,
            overlay: Overlay::None,
            cursor: 0,
            running: true,
            status_message: None,
        };
        app.refresh();
        app
    }

    /// Advance the clock and rederive if the day rolled over.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.now = now;
        if !self.page.is_cached_for(now) {
            self.refresh();
        }
    }

    /// Rederive the view from the page and keep the cursor in range.
    pub fn refresh(&mut self) {
        self.view = self.page.view(self.now).clone();
        self.cursor = self.cursor.min(self.view.matched.saturating_sub(1));
    }

    pub fn card_count(&self) -> usize {
        self.view.matched
    }

    /// Id of the record under the cursor.
    pub fn selected_id(&self) -> Option<DrugId> {
        self.view.card_at(self.cursor).map(|c| c.id)
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.card_count() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self) {
        self.cursor = self.card_count().saturating_sub(1);
    }

    /// Apply a search edit, resetting the selection to the top.
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut TrackerPage)) {
        edit(&mut self.page);
        self.cursor = 0;
        self.refresh();
    }

    pub fn toggle_show_expired(&mut self) {
        let shown = self.page.toggle_show_expired();
        self.cursor = 0;
        self.refresh();
        if shown {
            self.set_status("Showing expired patents");
        } else {
            self.set_status(format!(
                "Hiding expired patents ({} hidden)",
                self.view.hidden_expired
            ));
        }
    }

    pub fn open_detail(&mut self) {
        match self.selected_id() {
            Some(id) => self.overlay = Overlay::Detail(id),
            None => self.set_warning("No drug selected"),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
