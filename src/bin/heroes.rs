use std::path::PathBuf;

use anyhow::Result;

use mlbb_meta::config::ScrapeConfig;
use mlbb_meta::fetch::Fetcher;
use mlbb_meta::output::write_records_csv;
use mlbb_meta::roster;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    mlbb_meta::init_tracing();

    let out_path = parse_out_arg().unwrap_or_else(|| PathBuf::from("mlbb_heroes.csv"));
    let config = ScrapeConfig::from_env();
    let fetcher = Fetcher::new(&config)?;

    println!("Scraping hero roster...");
    let mut heroes = roster::fetch_roster(&fetcher, config.workers)?;
    heroes.sort_by(|a, b| a.name.cmp(&b.name));
    write_records_csv(&out_path, &heroes)?;

    let with_role = heroes.iter().filter(|hero| hero.role.is_some()).count();
    println!("Heroes scraped: {}", heroes.len());
    println!("With role/lane: {with_role}");
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
