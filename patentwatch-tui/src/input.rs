//! Keyboard input dispatch — overlays → search editing → browse keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, InputMode, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::Detail(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. The search box owns the keyboard while focused.
    match app.mode {
        InputMode::Search => handle_search_key(app, key),
        InputMode::Browse => handle_browse_key(app, key),
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.mode = InputMode::Browse;
        }
        KeyCode::Backspace => {
            app.edit_search(|p| {
                p.pop_search_char();
            });
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_search(|p| p.clear_search());
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_search(|p| p.push_search_char(c));
        }
        // Arrows still move the selection while typing.
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_previous(),
        _ => {}
    }
}

fn handle_browse_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => {
            app.mode = InputMode::Search;
        }
        KeyCode::Char('x') | KeyCode::Char(' ') => app.toggle_show_expired(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
        }
        KeyCode::Esc => {
            if !app.page.search_text().is_empty() {
                app.edit_search(|p| p.clear_search());
                app.set_status("Search cleared");
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{app_at, fixed_now};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut AppState, s: &str) {
        for c in s.chars() {
            handle_key(app, press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn slash_focuses_search_and_typing_filters() {
        let mut app = app_at(fixed_now());
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.mode, InputMode::Search);

        // 'q' and 'x' are text while searching, not quit/toggle.
        type_str(&mut app, "xq");
        assert!(app.running);
        assert!(!app.page.show_expired());
        assert_eq!(app.page.search_text(), "xq");

        handle_key(&mut app, press(KeyCode::Backspace));
        handle_key(&mut app, press(KeyCode::Backspace));
        type_str(&mut app, "ELIQ");
        assert_eq!(app.card_count(), 1);

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.mode, InputMode::Browse);
        assert_eq!(app.page.search_text(), "ELIQ");
    }

    #[test]
    fn ctrl_u_clears_search() {
        let mut app = app_at(fixed_now());
        handle_key(&mut app, press(KeyCode::Char('/')));
        type_str(&mut app, "hum");
        handle_key(&mut app, ctrl('u'));
        assert_eq!(app.page.search_text(), "");
    }

    #[test]
    fn esc_in_browse_clears_search() {
        let mut app = app_at(fixed_now());
        app.edit_search(|p| p.set_search_text("keytruda"));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.page.search_text(), "");
    }

    #[test]
    fn x_and_space_toggle_expired() {
        let mut app = app_at(fixed_now());
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(app.page.show_expired());
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(!app.page.show_expired());
    }

    #[test]
    fn navigation_and_detail() {
        let mut app = app_at(fixed_now());
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.cursor, app.card_count() - 1);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);

        let id = app.selected_id().unwrap();
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.overlay, Overlay::Detail(id));

        // Overlay swallows navigation.
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn welcome_dismissed_by_any_key() {
        let mut app = app_at(fixed_now());
        app.overlay = Overlay::Welcome;
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert_eq!(app.overlay, Overlay::None);
        assert!(app.running);
    }

    #[test]
    fn help_toggles() {
        let mut app = app_at(fixed_now());
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn quit_keys() {
        let mut app = app_at(fixed_now());
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = app_at(fixed_now());
        app.mode = InputMode::Search;
        handle_key(&mut app, ctrl('c'));
        assert!(!app.running);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = app_at(fixed_now());
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        key.state = KeyEventState::NONE;
        handle_key(&mut app, key);
        assert!(app.running);
    }
}
