use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::heroes::canonical_hero;
use crate::registry::SourceRecord;
use crate::types::HeroStatRow;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").expect("valid selector"));
static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").expect("valid selector"));
static STAT_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr.dota-stat-row").expect("valid selector"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static HEADER_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th").expect("valid selector"));
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").expect("valid selector"));

// Statistics table layout (20 columns):
//   0 rank | 1 hero | 2 pick total | 3 pick wins | 4 pick losses | 5 WR
//   6 %T | 7-10 blue side | 11-14 red side | 15 bans | 16 bans %T
//   17 P&B | 18 P&B %T | 19 details
const COL_HERO: usize = 1;
const COL_PICK_TOTAL: usize = 2;
const COL_PICK_WINS: usize = 3;
const COL_PICK_LOSSES: usize = 4;
const COL_BANS: usize = 15;
const MIN_CELLS: usize = 6;
const MIN_CELLS_FULL: usize = 16;

/// Link path fragments that mark a non-hero page on Liquipedia.
const NON_HERO_PATHS: &[&str] = &[
    "/mpl/",
    "/team",
    "/tournament",
    "/league",
    "/special:",
    "/index.php",
];

pub fn document_tables<'a>(doc: &'a Html) -> Vec<ElementRef<'a>> {
    doc.select(&TABLE).collect()
}

/// Extracts hero-stat rows from every table in the document, in traversal
/// order. Malformed tables contribute nothing; they never abort the rest.
pub fn extract_document(doc: &Html, source: &SourceRecord) -> Vec<HeroStatRow> {
    document_tables(doc)
        .into_iter()
        .flat_map(|table| parse_stats_table(table, source))
        .collect()
}

/// Parses one statistics table into hero-stat rows, dropping header rows,
/// non-hero rows (team names and the like) and rows with no pick data.
pub fn parse_stats_table(table: ElementRef<'_>, source: &SourceRecord) -> Vec<HeroStatRow> {
    let scope = table.select(&TBODY).next().unwrap_or(table);
    let mut rows: Vec<ElementRef<'_>> = scope.select(&STAT_ROW).collect();
    if rows.is_empty() {
        rows = scope.select(&ROW).collect();
    }

    let mut out = Vec::new();
    for row in rows {
        // Pure header rows carry th cells only.
        if row.select(&HEADER_CELL).next().is_some() && row.select(&CELL).next().is_none() {
            continue;
        }
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
        if cells.len() < MIN_CELLS {
            continue;
        }

        let Some(hero_name) = hero_name_from_cell(cells[COL_HERO]) else {
            continue;
        };
        let Some(hero) = canonical_hero(&hero_name) else {
            // Link-shaped but unrecognized: a team or event entry.
            debug!("dropping non-hero row: {hero_name}");
            continue;
        };

        if cells.len() < MIN_CELLS_FULL {
            debug!("row for {hero} has {} cells, skipping", cells.len());
            continue;
        }
        let pick_total = cell_number(cells[COL_PICK_TOTAL]);
        let pick_wins = cell_number(cells[COL_PICK_WINS]);
        let pick_losses = cell_number(cells[COL_PICK_LOSSES]);
        let ban_count = cell_number(cells[COL_BANS]);
        if pick_total == 0 && pick_wins == 0 && pick_losses == 0 {
            continue;
        }

        out.push(HeroStatRow {
            hero: hero.to_string(),
            pick_total,
            pick_wins,
            pick_losses,
            ban_count,
            win_rate: win_rate(pick_wins, pick_total),
            tournament_year: source.year,
            tournament_title: source.title.to_string(),
            tournament_url: source.url.to_string(),
        });
    }
    out
}

/// Pick win rate as a percentage, rounded to two decimals; ties round half
/// away from zero. Zero picks means zero, never a division by zero.
pub fn win_rate(pick_wins: u32, pick_total: u32) -> f64 {
    if pick_total == 0 {
        return 0.0;
    }
    (f64::from(pick_wins) / f64::from(pick_total) * 10_000.0).round() / 100.0
}

fn hero_name_from_cell(cell: ElementRef<'_>) -> Option<String> {
    for link in cell.select(&LINK) {
        let href = link.value().attr("href").unwrap_or_default();
        if !is_hero_href(href) {
            continue;
        }
        let name = match link.value().attr("title") {
            Some(title) if !title.is_empty() && !title.starts_with("Category:") => {
                title.to_string()
            }
            _ => element_text(link),
        };
        let name = strip_annotations(&name);
        if !name.is_empty() {
            return Some(name);
        }
    }
    None
}

fn is_hero_href(href: &str) -> bool {
    if !href.contains("/mobilelegends/") {
        return false;
    }
    let lower = href.to_lowercase();
    !NON_HERO_PATHS.iter().any(|path| lower.contains(path))
}

/// Strips the edit/history glyphs Liquipedia appends to infobox names.
fn strip_annotations(name: &str) -> String {
    name.replace("[e]", "").replace("[h]", "").trim().to_string()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn cell_number(cell: ElementRef<'_>) -> u32 {
    let digits: String = cell
        .text()
        .flat_map(|part| part.chars())
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}
