use std::collections::BTreeSet;
use std::fs;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::mpsc;

use anyhow::{Context, Result};
use scraper::Html;
use tracing::{info, warn};

use crate::config::ScrapeConfig;
use crate::extract;
use crate::fetch::Fetcher;
use crate::output::{self, MasterCsv};
use crate::registry::SourceRecord;
use crate::types::{HeroStatRow, RunSummary, SourceReport};

/// Fetches and parses one tournament page. Never fails outright: every
/// outcome is a (rows, report) pair, with the failure reason in the report.
pub fn process_source(fetcher: &Fetcher, source: &SourceRecord) -> (Vec<HeroStatRow>, SourceReport) {
    info!("processing {} ({})", source.title, source.url);

    let Some(body) = fetcher.get(source.url) else {
        return (Vec::new(), SourceReport::failed(source, "No response"));
    };

    let doc = Html::parse_document(&body);
    let tables = extract::document_tables(&doc);
    if tables.is_empty() {
        return (Vec::new(), SourceReport::failed(source, "No tables"));
    }

    // Tables are independent; a malformed one never blocks the rest.
    let mut rows = Vec::new();
    let mut heroes = BTreeSet::new();
    for table in tables {
        let table_rows = extract::parse_stats_table(table, source);
        for row in &table_rows {
            heroes.insert(row.hero.clone());
        }
        rows.extend(table_rows);
    }

    let heroes: Vec<String> = heroes.into_iter().collect();
    let error = if heroes.is_empty() {
        Some("No heroes parsed".to_string())
    } else {
        None
    };
    if let Some(reason) = &error {
        warn!("{}: {reason}", source.title);
    } else {
        info!("{}: found {} heroes", source.title, heroes.len());
    }

    let report = SourceReport {
        title: source.title.to_string(),
        count: heroes.len(),
        heroes,
        error,
    };
    (rows, report)
}

/// Dispatches every source across a bounded worker pool, persists results in
/// completion order (per-source CSV plus the master CSV) and accumulates the
/// run summary. One source's failure never aborts the others.
pub fn run_scrape(sources: &[SourceRecord], config: &ScrapeConfig) -> Result<RunSummary> {
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;
    let mut master = MasterCsv::create(&config.master_csv)?;

    let fetcher = Arc::new(Fetcher::new(config)?);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .context("failed to build worker pool")?;

    let (tx, rx) = mpsc::channel::<(SourceRecord, Vec<HeroStatRow>, SourceReport)>();
    for source in sources {
        let source = *source;
        let tx = tx.clone();
        let fetcher = Arc::clone(&fetcher);
        pool.spawn(move || {
            let outcome = catch_unwind(AssertUnwindSafe(|| process_source(&fetcher, &source)));
            let (rows, report) = outcome.unwrap_or_else(|_| {
                (
                    Vec::new(),
                    SourceReport::failed(&source, "worker panicked"),
                )
            });
            // The receiver only goes away once the run is over.
            let _ = tx.send((source, rows, report));
        });
    }
    drop(tx);

    let total = sources.len();
    let mut summary = RunSummary::default();
    for (source, rows, report) in rx {
        summary.total_tournaments += 1;

        let per_path = config
            .out_dir
            .join(format!("{}.csv", output::sanitize_title(source.title)));
        if let Err(err) = output::write_source_csv(&per_path, &rows) {
            warn!("{}: per-source csv failed: {err}", source.title);
        }
        master.append(&rows)?;
        summary.total_rows += rows.len();

        if report.error.is_some() {
            summary.failed.push(report);
        } else {
            summary.successful.push(report);
        }
        info!(
            "progress {}/{total}: ok {} failed {} rows {}",
            summary.total_tournaments,
            summary.successful.len(),
            summary.failed.len(),
            summary.total_rows
        );
    }

    Ok(summary)
}
