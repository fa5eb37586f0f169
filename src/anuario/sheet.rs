//! # Character Sheet
//!
//! The per-character detail view, in three shapes:
//!
//! - [`detail_rows`]: localized `(label, value)` rows, for UIs that lay them out
//!   themselves.
//! - [`render_text`]: the same rows as an aligned plain-text sheet (used by the
//!   export archive).
//! - [`report_params`]: the flat parameter map handed to the external report
//!   generator. Its keys are fixed by the report template, not by the locale.
//!
//! Values that carry no information are left out of the detail rows: blank values,
//! the literal `unknown`, and an empty JSON-style list `[]`.

use crate::labels::{label, Locale};
use crate::model::{Field, Record};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Identity and link fields are not part of the visible sheet.
const HIDDEN_FIELDS: [Field; 4] = [Field::Id, Field::Type, Field::Slug, Field::Wiki];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
}

fn is_informative(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value.eq_ignore_ascii_case("unknown") || value == "[]")
}

fn display_value(record: &Record, field: Field) -> String {
    match record.list(field) {
        Some(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| is_informative(s))
            .collect::<Vec<_>>()
            .join(", "),
        None => record.text(field).unwrap_or_default().trim().to_string(),
    }
}

/// Visible rows of the sheet, in field order.
pub fn detail_rows(record: &Record, locale: Locale) -> Vec<SheetRow> {
    Field::ALL
        .iter()
        .copied()
        .filter(|f| !HIDDEN_FIELDS.contains(f))
        .filter_map(|field| {
            let value = display_value(record, field);
            is_informative(&value).then(|| SheetRow {
                field,
                label: label(field, locale),
                value,
            })
        })
        .collect()
}

/// Plain-text sheet: the display name, an underline, then aligned rows.
pub fn render_text(record: &Record, locale: Locale) -> String {
    let rows = detail_rows(record, locale);
    let width = rows.iter().map(|r| r.label.width()).max().unwrap_or(0);

    let title = record.display_name();
    let mut out = format!("{}\n{}\n", title, "=".repeat(title.width()));
    for row in rows {
        let padding = width - row.label.width();
        out.push_str(&format!(
            "{}:{} {}\n",
            row.label,
            " ".repeat(padding),
            row.value
        ));
    }
    out
}

/// Parameters for the report template. Every key is always present.
pub fn report_params(record: &Record) -> BTreeMap<String, String> {
    let params = [
        ("Nombre", record.name.trim().to_string()),
        ("Alias", display_value(record, Field::AliasNames)),
        ("Casa", record.house.trim().to_string()),
        ("Genero", record.gender.trim().to_string()),
        ("Especie", record.species.trim().to_string()),
        ("Ojos", record.eye_color.trim().to_string()),
        ("Pelo", record.hair_color.trim().to_string()),
        ("Piel", record.skin_color.trim().to_string()),
        ("Patronus", record.patronus.trim().to_string()),
        ("Imagen", record.image.trim().to_string()),
    ];
    params
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
