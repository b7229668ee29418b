use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Reader;
use rust_xlsxwriter::Workbook;

use crate::extract::win_rate;
use crate::types::{HeroAggregate, HeroStatRow};

#[derive(Debug, Default)]
struct Totals<'a> {
    // A page can list the same hero in several tables; tournaments are
    // counted by distinct title, not by row.
    titles: HashSet<&'a str>,
    picks: u32,
    wins: u32,
    losses: u32,
    bans: u32,
}

/// Collapses per-tournament rows into one record per hero, with the
/// dashboard's tier label attached. Output is ordered by total picks
/// descending, then hero name.
pub fn aggregate_rows(rows: &[HeroStatRow], roles: &HashMap<String, String>) -> Vec<HeroAggregate> {
    let mut totals: HashMap<&str, Totals<'_>> = HashMap::new();
    for row in rows {
        let entry = totals.entry(row.hero.as_str()).or_default();
        entry.titles.insert(row.tournament_title.as_str());
        entry.picks += row.pick_total;
        entry.wins += row.pick_wins;
        entry.losses += row.pick_losses;
        entry.bans += row.ban_count;
    }

    let mut out: Vec<HeroAggregate> = totals
        .into_iter()
        .map(|(hero, t)| {
            let overall_win_rate = win_rate(t.wins, t.picks);
            let ban_rate = rate(t.bans, t.picks + t.bans);
            HeroAggregate {
                hero: hero.to_string(),
                role: roles.get(hero).cloned().unwrap_or_default(),
                tournaments: t.titles.len() as u32,
                total_picks: t.picks,
                total_wins: t.wins,
                total_losses: t.losses,
                total_bans: t.bans,
                overall_win_rate,
                ban_rate,
                tier: tier_label(t.picks, t.bans, overall_win_rate, ban_rate).to_string(),
            }
        })
        .collect();
    out.sort_by(|a, b| {
        b.total_picks
            .cmp(&a.total_picks)
            .then_with(|| a.hero.cmp(&b.hero))
    });
    out
}

/// Tier thresholds from the dashboard, applied per hero.
pub fn tier_label(total_picks: u32, total_bans: u32, win_rate: f64, ban_rate: f64) -> &'static str {
    if total_picks > 1000 && win_rate > 52.0 {
        "META"
    } else if total_bans > 500 && ban_rate > 40.0 {
        "PRIORITY BAN"
    } else if total_picks > 500 && win_rate < 48.0 {
        "POPULAR BUT WEAK"
    } else if win_rate > 54.0 {
        "HIGH WIN RATE"
    } else {
        "SITUATIONAL"
    }
}

fn rate(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (f64::from(part) / f64::from(whole) * 10_000.0).round() / 100.0
}

/// Reads the master CSV back into rows.
pub fn read_master_csv(path: &Path) -> Result<Vec<HeroStatRow>> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: HeroStatRow = record.context("invalid master csv row")?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads the roster CSV (Name,Role,Lane) into a hero -> primary-role map.
/// The primary role is the first comma-separated token.
pub fn read_roles_csv(path: &Path) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut roles = HashMap::new();
    for record in reader.records() {
        let record = record.context("invalid roster csv row")?;
        let Some(name) = record.get(0) else {
            continue;
        };
        let role = record.get(1).unwrap_or_default();
        let primary = role.split(',').next().unwrap_or_default().trim();
        if !name.is_empty() && !primary.is_empty() {
            roles.insert(name.to_string(), primary.to_string());
        }
    }
    Ok(roles)
}

/// Writes the aggregate table to an xlsx workbook with a single sheet.
pub fn write_aggregated_xlsx(path: &Path, aggregates: &[HeroAggregate]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Heroes").context("set sheet name")?;

    let header = [
        "Hero",
        "Role",
        "Tournaments",
        "Total Picks",
        "Total Wins",
        "Total Losses",
        "Total Bans",
        "Overall Win Rate",
        "Ban Rate",
        "Tier",
    ];
    for (col, title) in header.iter().enumerate() {
        sheet
            .write_string(0, col as u16, *title)
            .context("write xlsx header")?;
    }
    for (idx, agg) in aggregates.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, &agg.hero).context("write xlsx")?;
        sheet.write_string(row, 1, &agg.role).context("write xlsx")?;
        sheet
            .write_number(row, 2, f64::from(agg.tournaments))
            .context("write xlsx")?;
        sheet
            .write_number(row, 3, f64::from(agg.total_picks))
            .context("write xlsx")?;
        sheet
            .write_number(row, 4, f64::from(agg.total_wins))
            .context("write xlsx")?;
        sheet
            .write_number(row, 5, f64::from(agg.total_losses))
            .context("write xlsx")?;
        sheet
            .write_number(row, 6, f64::from(agg.total_bans))
            .context("write xlsx")?;
        sheet
            .write_number(row, 7, agg.overall_win_rate)
            .context("write xlsx")?;
        sheet
            .write_number(row, 8, agg.ban_rate)
            .context("write xlsx")?;
        sheet.write_string(row, 9, &agg.tier).context("write xlsx")?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    Ok(())
}
