//! PatentWatch TUI - terminal page for patent expiration tracking
//!
//! Single page with:
//! - Hero header holding the search box and show-expired checkbox
//! - Drug cards grouped under ascending expiration years
//! - Detail, help and first-run welcome overlays
//! - Query persistence across restarts

pub mod app;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
