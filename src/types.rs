use serde::{Deserialize, Serialize};

use crate::registry::SourceRecord;

/// One hero's pick/ban/win line for one tournament. Field order matches the
/// CSV schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStatRow {
    pub hero: String,
    pub pick_total: u32,
    pub pick_wins: u32,
    pub pick_losses: u32,
    pub ban_count: u32,
    pub win_rate: f64,
    pub tournament_year: i32,
    pub tournament_title: String,
    pub tournament_url: String,
}

/// Per-source diagnostic record: which heroes were found, or why nothing was.
#[derive(Debug, Clone)]
pub struct SourceReport {
    pub title: String,
    pub heroes: Vec<String>,
    pub count: usize,
    pub error: Option<String>,
}

impl SourceReport {
    pub fn failed(source: &SourceRecord, reason: &str) -> Self {
        Self {
            title: source.title.to_string(),
            heroes: Vec::new(),
            count: 0,
            error: Some(reason.to_string()),
        }
    }
}

/// Run-level counters, updated as each worker completes.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub total_tournaments: usize,
    pub total_rows: usize,
    pub successful: Vec<SourceReport>,
    pub failed: Vec<SourceReport>,
}

/// One hero's totals across every scraped tournament, plus its tier label.
#[derive(Debug, Clone, Serialize)]
pub struct HeroAggregate {
    pub hero: String,
    pub role: String,
    pub tournaments: u32,
    pub total_picks: u32,
    pub total_wins: u32,
    pub total_losses: u32,
    pub total_bans: u32,
    pub overall_win_rate: f64,
    pub ban_rate: f64,
    pub tier: String,
}

/// Roster entry scraped from a hero's Liquipedia page.
#[derive(Debug, Clone, Serialize)]
pub struct HeroInfo {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: Option<String>,
    #[serde(rename = "Lane")]
    pub lane: Option<String>,
}

/// Flattened hero record from the mlbb.io ranked-statistics API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSnapshot {
    pub hero_id: u32,
    pub hero_name: String,
    pub role: String,
    pub lane: String,
    pub pick_rate: f64,
    pub win_rate: f64,
    pub ban_rate: f64,
    pub speciality: String,
}
