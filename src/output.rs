use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::types::HeroStatRow;

pub const CSV_HEADER: &[&str] = &[
    "hero",
    "pick_total",
    "pick_wins",
    "pick_losses",
    "ban_count",
    "win_rate",
    "tournament_year",
    "tournament_title",
    "tournament_url",
];

const MAX_FILE_STEM: usize = 120;

/// Turns a tournament title into a safe file stem: runs of non-word
/// characters collapse to a single underscore, bounded length.
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_sep = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '-' {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }
    out.trim_matches('_').chars().take(MAX_FILE_STEM).collect()
}

/// Writer for the aggregate CSV; the header goes out once at construction
/// and rows are appended in completion order.
pub struct MasterCsv {
    writer: csv::Writer<File>,
}

impl MasterCsv {
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        writer.write_record(CSV_HEADER).context("write csv header")?;
        Ok(Self { writer })
    }

    pub fn append(&mut self, rows: &[HeroStatRow]) -> Result<()> {
        for row in rows {
            self.writer.serialize(row).context("write master csv row")?;
        }
        self.writer.flush().context("flush master csv")?;
        Ok(())
    }
}

/// Writes one tournament's rows to its own CSV. An empty row set still
/// produces a header-only file, matching the aggregate schema.
pub fn write_source_csv(path: &Path, rows: &[HeroStatRow]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(CSV_HEADER).context("write csv header")?;
    for row in rows {
        writer.serialize(row).context("write csv row")?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}

/// Serializes rows (with header) into an in-memory CSV buffer.
pub fn rows_to_csv(rows: &[HeroStatRow]) -> Result<String> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(CSV_HEADER).context("write csv header")?;
    for row in rows {
        writer.serialize(row).context("write csv row")?;
    }
    let buf = writer.into_inner().context("finish csv buffer")?;
    String::from_utf8(buf).context("csv output was not utf-8")
}

/// Generic CSV writer for serde-serializable records (roster, snapshots,
/// aggregates). Headers come from the record's field names.
pub fn write_records_csv<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for record in records {
        writer.serialize(record).context("write csv record")?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}
