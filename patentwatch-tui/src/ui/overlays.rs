//! Overlay widgets — welcome, help, record detail.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use patentwatch_core::format::{currency, long_date, months_label};
use patentwatch_core::timeline::record_months_until;
use patentwatch_core::DrugId;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to PatentWatch ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Press / and type a brand or generic name",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Drugs are grouped by the year their patent expires",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press x to include patents that already expired",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Press Enter on a card for prices and savings",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Keyboard reference.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Search");
    key(&mut lines, "/", "Focus the search box");
    key(&mut lines, "Enter / Esc", "Leave the search box (text is kept)");
    key(&mut lines, "Backspace", "Delete last character");
    key(&mut lines, "Ctrl-U", "Clear the search text");
    lines.push(Line::from(""));

    section(&mut lines, "Browse");
    key(&mut lines, "j / k", "Select next / previous drug");
    key(&mut lines, "g / G", "Jump to first / last drug");
    key(&mut lines, "x / Space", "Toggle show expired patents");
    key(&mut lines, "Enter", "Open drug detail");
    key(&mut lines, "Esc", "Clear the search text");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Ctrl-C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Reading a card");
    key(&mut lines, "months", "Approximate months until generic entry (30.44-day months)");
    key(&mut lines, "amber", "Generic entry within 12 months");
    key(&mut lines, "red", "Patent already expired");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

/// Full record drill-down.
pub fn render_detail(f: &mut Frame, area: Rect, app: &AppState, id: DrugId) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Drug Detail [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(rec) = app.page.catalog().get(id) else {
        let text = Paragraph::new(Span::styled("Drug not found.", theme::muted()));
        f.render_widget(text, inner);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(rec.name.clone(), theme::accent_bold())));
    if let Some(g) = &rec.generic_name {
        lines.push(Line::from(Span::styled(g.clone(), theme::text_secondary())));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Patent", theme::accent_bold())));
    field(&mut lines, "Expires", &long_date(rec.patent_expiration));
    let expired = rec.is_expired(app.now);
    let months = record_months_until(rec, app.now);
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}: ", "Until generic"), theme::muted()),
        if expired {
            Span::styled("expired", theme::urgency(0, true))
        } else {
            Span::styled(months_label(months), theme::urgency(months, false))
        },
    ]));
    opt_field(&mut lines, "Status", rec.status.as_deref());
    if let Some(s) = &rec.significance {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>18}: ", "Significance"), theme::muted()),
            Span::styled(s.clone(), theme::significance(s)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Drug", theme::accent_bold())));
    opt_field(&mut lines, "Category", rec.category.as_deref());
    opt_field(&mut lines, "Indication", rec.indication.as_deref());
    opt_field(&mut lines, "Manufacturer", rec.manufacturer.as_deref());
    lines.push(Line::from(""));

    if rec.current_price.is_some()
        || rec.estimated_generic_price.is_some()
        || rec.estimated_savings.is_some()
    {
        lines.push(Line::from(Span::styled("Pricing", theme::accent_bold())));
        opt_field(&mut lines, "Current price", rec.current_price.map(currency).as_deref());
        opt_field(
            &mut lines,
            "Est. generic price",
            rec.estimated_generic_price.map(currency).as_deref(),
        );
        opt_field(&mut lines, "Est. savings", rec.estimated_savings.as_deref());
        lines.push(Line::from(""));
    }

    if let Some(desc) = &rec.description {
        lines.push(Line::from(Span::styled("Notes", theme::accent_bold())));
        lines.push(Line::from(Span::styled(format!("  {desc}"), theme::text())));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>14}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

fn field(lines: &mut Vec<Line<'_>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}: ", label), theme::muted()),
        Span::styled(value.to_string(), theme::text()),
    ]));
}

fn opt_field(lines: &mut Vec<Line<'_>>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        field(lines, label, value);
    }
}
