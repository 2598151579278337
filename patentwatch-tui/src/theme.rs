//! Clinical-blue theme tokens for the PatentWatch TUI
//!
//! # Color Palette
//! - **Background**: Deep navy (hero block)
//! - **Accent**: Bright blue (headings, focus, selection)
//! - **Positive**: Teal green (generic entry far out, nothing to act on)
//! - **Warning**: Amber (generic entry within a year)
//! - **Negative**: Coral red (patent already expired)
//! - **Neutral**: Lavender (tags)
//! - **Muted**: Slate (secondary text, hints)

use ratatui::style::{Color, Modifier, Style};

/// Months-until at or below which a card is flagged as imminent.
pub const IMMINENT_MONTHS: u32 = 12;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Deep navy (hero surface)
    pub background: Color,
    /// Bright blue (focus, headings)
    pub accent: Color,
    /// Teal green (distant expirations)
    pub positive: Color,
    /// Coral red (expired)
    pub negative: Color,
    /// Amber (imminent)
    pub warning: Color,
    /// Lavender (tags)
    pub neutral: Color,
    /// Slate (muted text)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::clinical_blue()
    }
}

impl Theme {
    pub fn clinical_blue() -> Self {
        Self {
            background: Color::Rgb(23, 37, 84),
            accent: Color::Rgb(96, 165, 250),
            positive: Color::Rgb(45, 212, 191),
            negative: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 191, 36),
            neutral: Color::Rgb(196, 181, 253),
            muted: Color::Rgb(148, 163, 184),
            text_primary: Color::White,
            text_secondary: Color::Rgb(203, 213, 225),
        }
    }

    /// Badge color by how soon a generic can enter the market.
    pub fn urgency_color(&self, months_until: u32, expired: bool) -> Color {
        if expired {
            self.negative
        } else if months_until <= IMMINENT_MONTHS {
            self.warning
        } else {
            self.positive
        }
    }

    /// Color for the free-text significance field.
    pub fn significance_color(&self, significance: &str) -> Color {
        match significance.to_ascii_lowercase().as_str() {
            "high" => self.warning,
            "medium" => self.accent,
            "low" => self.muted,
            _ => self.text_secondary,
        }
    }
}

fn theme() -> Theme {
    Theme::default()
}

pub fn accent() -> Style {
    Style::default().fg(theme().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(theme().muted)
}

pub fn neutral() -> Style {
    Style::default().fg(theme().neutral)
}

pub fn warning() -> Style {
    Style::default().fg(theme().warning)
}

pub fn text() -> Style {
    Style::default().fg(theme().text_primary)
}

pub fn text_secondary() -> Style {
    Style::default().fg(theme().text_secondary)
}

pub fn hero() -> Style {
    Style::default()
        .bg(theme().background)
        .fg(theme().text_primary)
}

pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn urgency(months_until: u32, expired: bool) -> Style {
    Style::default()
        .fg(theme().urgency_color(months_until, expired))
        .add_modifier(Modifier::BOLD)
}

pub fn significance(value: &str) -> Style {
    Style::default().fg(theme().significance_color(value))
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
