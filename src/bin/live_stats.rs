use std::path::PathBuf;

use anyhow::Result;

use mlbb_meta::live_stats;
use mlbb_meta::output::write_records_csv;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    mlbb_meta::init_tracing();

    let out_path = parse_out_arg().unwrap_or_else(|| PathBuf::from("mlbb_hero_datasets.csv"));

    println!("Fetching ranked hero statistics...");
    let snapshots = live_stats::fetch_hero_statistics()?;
    write_records_csv(&out_path, &snapshots)?;

    println!("Heroes fetched: {}", snapshots.len());
    println!("Saved: {}", out_path.display());
    Ok(())
}

fn parse_out_arg() -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--out=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--out"
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(PathBuf::from(next));
        }
    }
    None
}
