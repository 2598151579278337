//! Bottom status bar — match counts, key hints, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, InputMode, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let view = &app.view;
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(" {} of {} drugs", view.matched, view.total),
        theme::accent(),
    ));
    if view.hidden_expired > 0 {
        spans.push(Span::styled(
            format!(" ({} expired hidden)", view.hidden_expired),
            theme::warning(),
        ));
    }

    spans.push(Span::raw(" | "));
    let hints = match app.mode {
        InputMode::Search => "typing: Enter/Esc done, Ctrl-U clear",
        InputMode::Browse => "/:search x:expired j/k:move Enter:detail ?:help q:quit",
    };
    spans.push(Span::styled(hints, theme::muted()));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}
