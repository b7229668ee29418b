use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::types::HeroSnapshot;

const STATS_URL: &str = "https://mlbb.io/api/hero/filtered-statistics?rankId=6&timeframeId=5";
const REQUEST_TIMEOUT_SECS: u64 = 10;

const API_HEADERS: &[(&str, &str)] = &[
    ("accept", "application/json, text/plain, */*"),
    ("accept-language", "en-US,en;q=0.9,id;q=0.8,ga;q=0.7"),
    ("referer", "https://mlbb.io/hero-statistics"),
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36",
    ),
    ("x-client-secret", "259009191be734535393edc59e865dce"),
];

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    success: bool,
    #[serde(default)]
    data: Vec<ApiHero>,
}

#[derive(Debug, Deserialize)]
struct ApiHero {
    hero_id: u32,
    hero_name: String,
    #[serde(default)]
    role: Vec<String>,
    #[serde(default)]
    lane: Vec<String>,
    #[serde(default)]
    speciality: Vec<String>,
    pick_rate: f64,
    win_rate: f64,
    ban_rate: f64,
}

/// Fetches the current ranked-queue hero statistics snapshot from mlbb.io.
pub fn fetch_hero_statistics() -> Result<Vec<HeroSnapshot>> {
    let client = http_client()?;
    let mut req = client.get(STATS_URL);
    for (name, value) in API_HEADERS {
        req = req.header(*name, *value);
    }
    let body = req
        .send()
        .context("hero statistics request failed")?
        .error_for_status()
        .context("hero statistics request rejected")?
        .text()
        .context("failed reading hero statistics body")?;
    parse_hero_statistics_json(&body)
}

pub fn parse_hero_statistics_json(raw: &str) -> Result<Vec<HeroSnapshot>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty hero statistics response"));
    }
    let parsed: ApiResponse =
        serde_json::from_str(trimmed).context("invalid hero statistics json")?;
    if !parsed.success {
        return Err(anyhow!("api returned unsuccessful response"));
    }

    let snapshots = parsed
        .data
        .into_iter()
        .map(|hero| HeroSnapshot {
            hero_id: hero.hero_id,
            hero_name: hero.hero_name,
            role: first_or_unknown(&hero.role),
            lane: first_or_unknown(&hero.lane),
            pick_rate: hero.pick_rate,
            win_rate: hero.win_rate,
            ban_rate: hero.ban_rate,
            speciality: if hero.speciality.is_empty() {
                "Unknown".to_string()
            } else {
                hero.speciality.join(", ")
            },
        })
        .collect();
    Ok(snapshots)
}

fn first_or_unknown(values: &[String]) -> String {
    values
        .first()
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string())
}
