use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AnuarioError, Result};
use crate::labels::Locale;
use crate::model::Record;
use crate::sheet;
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write a `.tar.gz` with one text sheet per record into `out_dir`.
/// An empty slug list exports every record.
pub fn run<S: DataStore, I: AsRef<str>>(
    store: &S,
    slugs: &[I],
    out_dir: &Path,
    locale: Locale,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let records = resolve_records(store, slugs, &mut result);

    if records.is_empty() {
        result.add_message(CmdMessage::info("No records to export."));
        return Ok(result);
    }

    if !out_dir.exists() {
        fs::create_dir_all(out_dir).map_err(AnuarioError::Io)?;
    }
    let now = Utc::now();
    let filename = format!("anuario-{}.tar.gz", now.format("%Y-%m-%d_%H-%M-%S"));
    let path = out_dir.join(filename);
    let file = File::create(&path).map_err(AnuarioError::Io)?;

    write_archive(file, &records, locale)?;

    result.add_message(CmdMessage::success(format!(
        "Exported {} records to {}",
        records.len(),
        path.display()
    )));
    Ok(result.with_affected_records(records).with_paths(vec![path]))
}

fn resolve_records<S: DataStore, I: AsRef<str>>(
    store: &S,
    slugs: &[I],
    result: &mut CmdResult,
) -> Vec<Record> {
    let all = store.list_all();
    if slugs.is_empty() {
        return all;
    }

    let mut selected = Vec::new();
    for slug in slugs {
        let slug = slug.as_ref();
        match all.iter().find(|r| r.slug_matches(slug)) {
            Some(record) => selected.push(record.clone()),
            None => result.add_message(CmdMessage::warning(format!(
                "Record not found, skipped: {}",
                slug
            ))),
        }
    }
    selected
}

fn write_archive<W: Write>(writer: W, records: &[Record], locale: Locale) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for (i, record) in records.iter().enumerate() {
        let entry_name = format!("fichas/{:03}-{}.txt", i + 1, sanitize_filename(&record.slug));
        let content = sheet::render_text(record, locale);

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())
            .map_err(AnuarioError::Io)?;
    }

    tar.into_inner()
        .map_err(AnuarioError::Io)?
        .finish()
        .map_err(AnuarioError::Io)?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim_matches('_')
        .to_string()
}
