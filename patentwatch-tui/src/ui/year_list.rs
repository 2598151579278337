//! Year sections — a heading per expiration year followed by its drug cards.
//!
//! The whole grouped result is laid out as lines; the paragraph scrolls just
//! far enough to keep the selected card on screen.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use patentwatch_core::format::months_label;
use patentwatch_core::{Card, TrackerView};

use crate::app::AppState;
use crate::theme;

/// Lines per card, including the trailing spacer.
pub const CARD_LINES: usize = 5;

/// Laid-out body content.
pub struct Layout {
    pub lines: Vec<Line<'static>>,
    /// First line of each card, in display order.
    pub card_starts: Vec<usize>,
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let width = area.width as usize;

    if app.view.is_empty() {
        let para = Paragraph::new(empty_lines(app));
        f.render_widget(para, area);
        return;
    }

    let layout = build(&app.view, app.cursor, width);
    let offset = scroll_offset(&layout, app.cursor, area.height as usize);
    let para = Paragraph::new(layout.lines).scroll((offset, 0));
    f.render_widget(para, area);
}

/// Lay out every section and card.
pub fn build(view: &TrackerView, cursor: usize, width: usize) -> Layout {
    let mut lines = Vec::new();
    let mut card_starts = Vec::new();
    let mut index = 0;

    for section in &view.sections {
        lines.push(year_heading(section.year, width));
        for card in &section.cards {
            card_starts.push(lines.len());
            push_card(&mut lines, card, index == cursor, width);
            index += 1;
        }
    }

    Layout { lines, card_starts }
}

/// Vertical scroll that keeps the selected card fully visible.
pub fn scroll_offset(layout: &Layout, cursor: usize, height: usize) -> u16 {
    let Some(&start) = layout.card_starts.get(cursor) else {
        return 0;
    };
    // Keep the year heading in view for the first card of a section.
    let top = start.saturating_sub(1);
    let bottom = start + CARD_LINES;
    let offset = if bottom > height {
        (bottom - height).min(top)
    } else {
        0
    };
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn year_heading(year: i32, width: usize) -> Line<'static> {
    let label = format!(" {year} ");
    let rule = "─".repeat(width.saturating_sub(label.len() + 1));
    Line::from(vec![
        Span::styled(label, theme::accent_bold()),
        Span::styled(rule, theme::muted()),
    ])
}

fn push_card(lines: &mut Vec<Line<'static>>, card: &Card, selected: bool, width: usize) {
    let bar_style = if selected {
        theme::selected()
    } else {
        theme::accent()
    };
    let bar = || Span::styled("▌ ", bar_style);

    let name_style = if selected {
        theme::selected().add_modifier(Modifier::BOLD)
    } else {
        theme::text().add_modifier(Modifier::BOLD)
    };
    let badge = if card.expired {
        Span::styled("expired ", theme::urgency(0, true))
    } else {
        Span::styled(
            format!("{} until generic ", months_label(card.months_until)),
            theme::urgency(card.months_until, false),
        )
    };
    lines.push(justify(
        vec![bar(), Span::styled(card.name.clone(), name_style)],
        vec![badge],
        width,
    ));

    lines.push(Line::from(vec![
        bar(),
        Span::styled(card.secondary.clone().unwrap_or_default(), theme::text_secondary()),
    ]));

    let mut tags = vec![bar()];
    for tag in &card.tags {
        tags.push(Span::styled(format!("[{tag}]"), theme::neutral()));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));

    let mut left = vec![bar()];
    if let Some(m) = &card.manufacturer {
        left.push(Span::styled("Manufacturer: ", theme::muted()));
        left.push(Span::styled(m.clone(), theme::text()));
    }
    lines.push(justify(
        left,
        vec![
            Span::styled("Patent Expires: ", theme::muted()),
            Span::styled(format!("{} ", card.expires_on), theme::text()),
        ],
        width,
    ));

    lines.push(Line::from(""));
}

/// Left spans, a gap, then right spans flush against `width`.
fn justify(mut left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let used: usize = left.iter().chain(right.iter()).map(|s| s.width()).sum();
    let gap = width.saturating_sub(used).max(1);
    left.push(Span::raw(" ".repeat(gap)));
    left.extend(right);
    Line::from(left)
}

fn empty_lines(app: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  No drugs match \"{}\".", app.page.search_text()),
            theme::warning(),
        )),
    ];
    if app.view.hidden_expired > 0 {
        lines.push(Line::from(Span::styled(
            format!(
                "  {} expired match(es) hidden. Press x to show expired patents.",
                app.view.hidden_expired
            ),
            theme::muted(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Press Esc to clear the search.",
            theme::muted(),
        )));
    }
    lines
}
