//! App state persistence — JSON save/load across restarts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use patentwatch_core::config::config_dir;

use crate::app::{AppState, Overlay};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub search_text: String,
    pub show_expired: bool,
    pub welcome_dismissed: bool,
}

/// `<config_dir>/patentwatch/state.json`.
pub fn default_path() -> PathBuf {
    config_dir().join("state.json")
}

/// Load persisted state from disk. Returns `None` if the file is missing or corrupt.
pub fn load(path: &Path) -> Option<PersistedState> {
    let content = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring corrupt state file");
            None
        }
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        search_text: app.page.search_text().to_string(),
        show_expired: app.page.show_expired(),
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState. With no saved state this is a first run.
pub fn apply(app: &mut AppState, state: Option<PersistedState>) {
    match state {
        Some(state) => {
            app.page.set_search_text(state.search_text);
            app.page.set_show_expired(state.show_expired);
            if !state.welcome_dismissed {
                app.overlay = Overlay::Welcome;
            }
            app.refresh();
        }
        None => app.overlay = Overlay::Welcome,
    }
}
