//! Hero header — title, tagline, search box, show-expired checkbox.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, InputMode};
use crate::theme;

/// Rows taken by the hero block, borders included.
pub const HEIGHT: u16 = 8;

const TITLE: &str = "Track When Your Medications Go Generic";
const TAGLINE: &str = "Save up to 85% by knowing when brand-name drugs become available as generics";
const PLACEHOLDER: &str = "Search by drug name...";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let searching = app.mode == InputMode::Search;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(searching))
        .title(" PatentWatch ")
        .title_style(theme::accent_bold())
        .style(theme::hero());

    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            theme::text().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, theme::text_secondary())),
        Line::from(""),
        search_line(app.page.search_text(), searching),
        Line::from(""),
        checkbox_line(app.page.show_expired()),
    ];

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

fn search_line(text: &str, focused: bool) -> Line<'static> {
    let prompt_style = if focused {
        theme::accent_bold()
    } else {
        theme::muted()
    };
    let mut spans = vec![Span::styled(" Search > ", prompt_style)];
    if text.is_empty() && !focused {
        spans.push(Span::styled(PLACEHOLDER, theme::muted()));
        spans.push(Span::styled("  [/] to type", theme::muted()));
    } else {
        spans.push(Span::styled(text.to_string(), theme::text()));
        if focused {
            spans.push(Span::styled("_", theme::accent()));
            spans.push(Span::styled("  [Enter/Esc] done  [Ctrl-U] clear", theme::muted()));
        }
    }
    Line::from(spans)
}

fn checkbox_line(checked: bool) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(format!(" {mark} "), theme::accent_bold()),
        Span::styled("Show expired patents", theme::text()),
        Span::styled("  [x] to toggle", theme::muted()),
    ])
}
