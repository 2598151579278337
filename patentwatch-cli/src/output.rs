//! Output writers for `list` and `show`.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Serialize;

use patentwatch_core::format::{currency, long_date, months_label};
use patentwatch_core::timeline::record_months_until;
use patentwatch_core::{Card, DrugRecord, SearchQuery, TrackerView};

/// Year sections as plain text.
pub fn write_table<W: Write>(out: &mut W, view: &TrackerView, query: &SearchQuery) -> Result<()> {
    if view.is_empty() {
        if query.text.is_empty() {
            writeln!(out, "No drugs to show.")?;
        } else {
            writeln!(out, "No drugs match \"{}\".", query.text)?;
        }
    }

    for section in &view.sections {
        writeln!(out, "== {} ==", section.year)?;
        for card in &section.cards {
            write_card(out, card)?;
        }
        writeln!(out)?;
    }

    write!(out, "{} of {} drugs", view.matched, view.total)?;
    if view.hidden_expired > 0 {
        write!(
            out,
            " ({} expired hidden, use --show-expired)",
            view.hidden_expired
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_card<W: Write>(out: &mut W, card: &Card) -> Result<()> {
    let badge = if card.expired {
        "expired".to_string()
    } else {
        format!("{} until generic", months_label(card.months_until))
    };
    writeln!(out, "  {:<24} {:>28}", card.name, badge)?;
    if let Some(secondary) = &card.secondary {
        writeln!(out, "    {secondary}")?;
    }
    if !card.tags.is_empty() {
        let tags: Vec<String> = card.tags.iter().map(|t| format!("[{t}]")).collect();
        writeln!(out, "    {}", tags.join(" "))?;
    }
    match &card.manufacturer {
        Some(m) => writeln!(
            out,
            "    Manufacturer: {m}  Patent Expires: {}",
            card.expires_on
        )?,
        None => writeln!(out, "    Patent Expires: {}", card.expires_on)?,
    }
    Ok(())
}

/// The whole view as pretty JSON.
pub fn write_json<W: Write>(out: &mut W, view: &TrackerView) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, view)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    year: i32,
    id: u32,
    name: &'a str,
    secondary: &'a str,
    category_indication: String,
    manufacturer: &'a str,
    patent_expiration: String,
    months_until: u32,
    expired: bool,
}

/// One row per card, in display order, with a `year` column.
pub fn write_csv<W: Write>(out: &mut W, view: &TrackerView) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for section in &view.sections {
        for card in &section.cards {
            writer.serialize(CsvRow {
                year: section.year,
                id: card.id,
                name: &card.name,
                secondary: card.secondary.as_deref().unwrap_or(""),
                category_indication: card.tags.join("; "),
                manufacturer: card.manufacturer.as_deref().unwrap_or(""),
                patent_expiration: card.patent_expiration.format("%Y-%m-%d").to_string(),
                months_until: card.months_until,
                expired: card.expired,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Every field of one record.
pub fn write_detail<W: Write>(out: &mut W, rec: &DrugRecord, now: NaiveDateTime) -> Result<()> {
    writeln!(out, "{} (#{})", rec.name, rec.id)?;
    let mut field = |label: &str, value: Option<String>| -> Result<()> {
        if let Some(value) = value {
            writeln!(out, "  {label:>18}: {value}")?;
        }
        Ok(())
    };
    field("Generic name", rec.generic_name.clone())?;
    field("Patent expires", Some(long_date(rec.patent_expiration)))?;
    let until = if rec.is_expired(now) {
        "expired".to_string()
    } else {
        months_label(record_months_until(rec, now))
    };
    field("Until generic", Some(until))?;
    field("Status", rec.status.clone())?;
    field("Significance", rec.significance.clone())?;
    field("Category", rec.category.clone())?;
    field("Indication", rec.indication.clone())?;
    field("Manufacturer", rec.manufacturer.clone())?;
    field("Current price", rec.current_price.map(currency))?;
    field("Est. generic price", rec.estimated_generic_price.map(currency))?;
    field("Est. savings", rec.estimated_savings.clone())?;
    field("Description", rec.description.clone())?;
    Ok(())
}
