use std::time::Instant;

use anyhow::Result;

use mlbb_meta::config::ScrapeConfig;
use mlbb_meta::registry::TOURNAMENTS;
use mlbb_meta::scrape;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    mlbb_meta::init_tracing();

    let config = ScrapeConfig::from_env();
    println!("MLBB Tournament Scraper");
    println!("Tournaments to scrape: {}", TOURNAMENTS.len());
    println!("Thread workers: {}", config.workers);
    println!("Proxies: {}", config.proxies.join(", "));
    println!();

    let started = Instant::now();
    let summary = scrape::run_scrape(TOURNAMENTS, &config)?;

    println!();
    println!("Total tournaments processed: {}", summary.total_tournaments);
    println!("Successful: {}", summary.successful.len());
    println!("Failed: {}", summary.failed.len());
    println!("Total hero-stat rows written: {}", summary.total_rows);
    println!("Master CSV: {}", config.master_csv.display());
    println!("Per-tournament CSVs: {}/", config.out_dir.display());

    if !summary.failed.is_empty() {
        println!();
        println!("Failed tournaments ({}):", summary.failed.len());
        for report in &summary.failed {
            println!(
                "  {} - {}",
                report.title,
                report.error.as_deref().unwrap_or("Unknown")
            );
        }
    }
    if !summary.successful.is_empty() {
        println!();
        println!("Successful tournaments - hero counts:");
        for report in summary.successful.iter().take(20) {
            println!("  {}: {} heroes", report.title, report.count);
        }
        if summary.successful.len() > 20 {
            println!("  ... and {} more", summary.successful.len() - 20);
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    println!();
    println!(
        "Finished in {elapsed:.1} seconds ({:.1} minutes)",
        elapsed / 60.0
    );
    Ok(())
}
