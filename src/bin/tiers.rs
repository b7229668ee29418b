use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};

use mlbb_meta::aggregate;
use mlbb_meta::output::write_records_csv;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    mlbb_meta::init_tracing();

    let master = path_arg("--master").unwrap_or_else(|| PathBuf::from("mlbb_hero_stats_master.csv"));
    let roles_path = path_arg("--roles").unwrap_or_else(|| PathBuf::from("mlbb_heroes.csv"));
    let out_path = path_arg("--out").unwrap_or_else(|| PathBuf::from("mlbb_heroes_aggregated.csv"));
    let xlsx_path = path_arg("--xlsx");

    let rows = aggregate::read_master_csv(&master)
        .with_context(|| format!("unable to read {}", master.display()))?;
    // Role data is optional; tiers still work without a roster file.
    let roles = aggregate::read_roles_csv(&roles_path).unwrap_or_else(|_| HashMap::new());

    let aggregates = aggregate::aggregate_rows(&rows, &roles);
    write_records_csv(&out_path, &aggregates)?;

    println!("Rows read: {}", rows.len());
    println!("Heroes aggregated: {}", aggregates.len());
    println!("Saved: {}", out_path.display());

    let mut tier_counts: HashMap<&str, usize> = HashMap::new();
    for agg in &aggregates {
        *tier_counts.entry(agg.tier.as_str()).or_default() += 1;
    }
    let mut tiers = tier_counts.into_iter().collect::<Vec<_>>();
    tiers.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    println!();
    println!("Tier distribution:");
    for (tier, count) in tiers {
        println!("  {tier}: {count}");
    }

    if let Some(xlsx_path) = xlsx_path {
        aggregate::write_aggregated_xlsx(&xlsx_path, &aggregates)?;
        println!();
        println!("Workbook: {}", xlsx_path.display());
    }
    Ok(())
}

fn path_arg(flag: &str) -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(PathBuf::from(next));
        }
    }
    None
}
