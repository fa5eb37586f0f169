//! # Line Codec
//!
//! Maps one [`Record`] to one line of the record file and back.
//!
//! The format looks like CSV but is not RFC 4180:
//!
//! - A comma splits cells unless it sits inside a double-quoted region. Concretely,
//!   a comma is a separator when the number of `"` characters after it on the line
//!   is even.
//! - Every cell is trimmed and loses all of its `"` characters. Quotes are never
//!   escaped, so a value containing a quote does not survive a round trip.
//! - On encode, a cell containing a comma is wrapped in quotes; nothing else is
//!   quoted.
//! - List fields are one cell with elements joined by `;`.
//!
//! Decoding is lossy but never fails: short rows leave trailing fields empty, long
//! rows lose their extra cells, blank lines are skipped, and the first line of a
//! file is skipped as the header no matter what it contains.

use crate::model::{Field, Record, DEFAULT_HOUSE, DEFAULT_NAME};
use std::collections::HashMap;

/// Column order shared by the header and every row.
pub const HEADER: &[Field] = &Field::ALL;

const SEPARATOR: char = ',';
const QUOTE: char = '"';

/// Splits a line on the commas that are outside double-quoted regions.
pub fn split_cells(line: &str) -> Vec<&str> {
    let total_quotes = line.matches(QUOTE).count();
    let mut quotes_seen = 0;
    let mut start = 0;
    let mut cells = Vec::new();

    for (idx, ch) in line.char_indices() {
        match ch {
            QUOTE => quotes_seen += 1,
            SEPARATOR if (total_quotes - quotes_seen) % 2 == 0 => {
                cells.push(&line[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    cells.push(&line[start..]);
    cells
}

fn clean_cell(cell: &str) -> String {
    cell.trim().replace(QUOTE, "").trim().to_string()
}

/// Decodes one data line into a field -> value map.
///
/// Cell *i* maps to `header[i]`. Cells past the end of the header are ignored and
/// header fields without a cell are left out of the map.
pub fn decode_line(line: &str, header: &[Field]) -> HashMap<Field, String> {
    split_cells(line)
        .into_iter()
        .zip(header.iter().copied())
        .map(|(cell, field)| (field, clean_cell(cell)))
        .collect()
}

/// Builds a record from decoded cells.
///
/// Missing text fields become empty strings and missing list fields empty lists,
/// except `name` and `house` which fall back to their display defaults.
pub fn record_from_cells(cells: &HashMap<Field, String>) -> Record {
    let mut record = Record::default();
    for field in Field::ALL {
        match cells.get(&field) {
            Some(value) => record.set(field, value),
            None => match field {
                Field::Name => record.set(field, DEFAULT_NAME),
                Field::House => record.set(field, DEFAULT_HOUSE),
                _ => {}
            },
        }
    }
    record
}

/// Decodes a whole file body. The first line is always treated as the header.
pub fn decode_file(text: &str) -> Vec<Record> {
    text.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| record_from_cells(&decode_line(line, HEADER)))
        .collect()
}

fn encode_cell(value: String) -> String {
    if value.contains(SEPARATOR) {
        format!("{}{}{}", QUOTE, value, QUOTE)
    } else {
        value
    }
}

/// Encodes one record as a data line (without the line terminator).
pub fn encode_row(record: &Record, header: &[Field]) -> String {
    header
        .iter()
        .map(|field| encode_cell(record.cell(*field)))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

pub fn header_line(header: &[Field]) -> String {
    header
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Encodes the full file: header line, then one line per record, in order.
pub fn encode_file(records: &[Record]) -> String {
    let mut out = header_line(HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&encode_row(record, HEADER));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harry() -> Record {
        let mut r = Record::new("harry-potter");
        r.id = "9e3f7ce4".into();
        r.kind = "character".into();
        r.name = "Harry James Potter".into();
        r.house = "Gryffindor".into();
        r.patronus = "Stag".into();
        r.family_members = vec!["James Potter".into(), "Lily J. Potter".into()];
        r.wands = vec!["11 Holly phoenix feather".into()];
        r
    }

    #[test]
    fn split_respects_quoted_regions() {
        assert_eq!(split_cells("a,\"b,c\",d"), vec!["a", "\"b,c\"", "d"]);
        assert_eq!(split_cells("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_cells(""), vec![""]);
    }

    #[test]
    fn split_with_odd_quote_count_follows_parity_after_comma() {
        // One stray quote: only commas with an even number of quotes after them
        // split, which is every comma to the right of the quote.
        assert_eq!(split_cells("a,b\"c,d"), vec!["a,b\"c", "d"]);
    }

    #[test]
    fn decode_line_trims_and_strips_quotes() {
        let cells = decode_line(" 1 , \"x, y\" ,z", &[Field::Id, Field::Type, Field::Slug]);
        assert_eq!(cells[&Field::Id], "1");
        assert_eq!(cells[&Field::Type], "x, y");
        assert_eq!(cells[&Field::Slug], "z");
    }

    #[test]
    fn decode_line_drops_extra_cells() {
        let cells = decode_line("1,2,3,4", &[Field::Id, Field::Type]);
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn decode_line_omits_missing_cells() {
        let cells = decode_line("1", &[Field::Id, Field::Type]);
        assert_eq!(cells.len(), 1);
        assert!(!cells.contains_key(&Field::Type));
    }

    #[test]
    fn round_trip_without_commas_or_quotes() {
        let record = harry();
        let line = encode_row(&record, HEADER);
        let decoded = record_from_cells(&decode_line(&line, HEADER));
        assert_eq!(decoded, record);
    }

    #[test]
    fn list_cell_uses_semicolons() {
        let mut record = Record::new("x");
        record.family_members = vec!["A".into(), "B".into()];
        let line = encode_row(&record, HEADER);
        let cells = split_cells(&line);
        assert_eq!(cells[10], "A;B");

        let decoded = record_from_cells(&decode_line(&line, HEADER));
        assert_eq!(decoded.family_members, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn cell_with_comma_is_quoted_and_survives() {
        let mut record = harry();
        record.born = "31 July, 1980".into();
        let line = encode_row(&record, HEADER);
        assert!(line.contains("\"31 July, 1980\""));

        let decoded = record_from_cells(&decode_line(&line, HEADER));
        assert_eq!(decoded.born, "31 July, 1980");
        assert_eq!(decoded, record);
    }

    #[test]
    fn embedded_quotes_are_lost() {
        let mut record = Record::new("x");
        record.boggart = "Lord \"V\"".into();
        let decoded = record_from_cells(&decode_line(&encode_row(&record, HEADER), HEADER));
        assert_eq!(decoded.boggart, "Lord V");
    }

    #[test]
    fn short_row_pads_with_empty_values() {
        let decoded = record_from_cells(&decode_line("1,character,luna-lovegood", HEADER));
        assert_eq!(decoded.id, "1");
        assert_eq!(decoded.slug, "luna-lovegood");
        assert!(decoded.alias_names.is_empty());
        assert!(decoded.patronus.is_empty());
        assert!(decoded.wiki.is_empty());
        assert_eq!(decoded.name, DEFAULT_NAME);
        assert_eq!(decoded.house, DEFAULT_HOUSE);
    }

    #[test]
    fn present_but_empty_name_is_kept_empty() {
        let record = Record::new("x");
        let decoded = record_from_cells(&decode_line(&encode_row(&record, HEADER), HEADER));
        assert_eq!(decoded.name, "");
        assert_eq!(decoded.house, "");
    }

    #[test]
    fn decode_file_skips_header_and_blank_lines() {
        let text = "whatever,is,here\n1,character,a\n\n   \n2,character,b\r\n";
        let records = decode_file(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slug, "a");
        assert_eq!(records[1].slug, "b");
    }

    #[test]
    fn decode_file_skips_first_line_even_if_it_is_data() {
        let records = decode_file("1,character,a\n2,character,b\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "b");
    }

    #[test]
    fn encode_file_writes_header_then_rows() {
        let text = encode_file(&[harry(), Record::new("ron-weasley")]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,type,slug,alias_names,"));
        assert!(lines[0].ends_with(",weight,wiki"));
        assert_eq!(decode_file(&text), vec![harry(), Record::new("ron-weasley")]);
    }
}
