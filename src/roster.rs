use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use scraper::{ElementRef, Html, Selector};
use tracing::{info, warn};

use crate::fetch::Fetcher;
use crate::types::HeroInfo;

const BASE: &str = "https://liquipedia.net";
const PORTAL_URL: &str = "https://liquipedia.net/mobilelegends/Portal:Heroes";

static GRID_LINK: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.sapphire-theme-dark-bg.zoom-container > a").expect("valid selector")
});
static INFOBOX_HEADER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.infobox-header").expect("valid selector"));
static INFOBOX_DESC: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.infobox-cell-2.infobox-description").expect("valid selector")
});

#[derive(Debug, Clone)]
pub struct HeroPage {
    pub name: String,
    pub url: String,
}

/// Scrapes the full hero roster: the portal page for the hero list, then
/// each hero page for role and lane. Page failures degrade to a roster row
/// with the portal name and no role/lane.
pub fn fetch_roster(fetcher: &Fetcher, workers: usize) -> Result<Vec<HeroInfo>> {
    let body = fetcher
        .get(PORTAL_URL)
        .ok_or_else(|| anyhow!("no response from heroes portal"))?;
    let links = parse_hero_links(&body)?;
    info!("heroes found: {}", links.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("failed to build roster pool")?;
    let roster = pool.install(|| {
        links
            .par_iter()
            .map(|hero| match fetcher.get(&hero.url) {
                Some(page) => parse_hero_page(&page, &hero.name),
                None => {
                    warn!("no response for hero page {}", hero.name);
                    HeroInfo {
                        name: hero.name.clone(),
                        role: None,
                        lane: None,
                    }
                }
            })
            .collect()
    });
    Ok(roster)
}

/// Pulls hero links out of the portal's "All Heroes" grid.
pub fn parse_hero_links(html: &str) -> Result<Vec<HeroPage>> {
    let doc = Html::parse_document(html);
    let mut links = Vec::new();
    for a in doc.select(&GRID_LINK) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        let Some(title) = a.value().attr("title") else {
            continue;
        };
        links.push(HeroPage {
            name: title.trim().to_string(),
            url: format!("{BASE}{href}"),
        });
    }
    if links.is_empty() {
        return Err(anyhow!("hero grid not found on portal page"));
    }
    Ok(links)
}

/// Parses one hero page: the infobox header for the clean name (minus the
/// `[e]`/`[h]` edit buttons) and the Role:/Lane: infobox rows.
pub fn parse_hero_page(html: &str, fallback_name: &str) -> HeroInfo {
    let doc = Html::parse_document(html);

    let name = doc
        .select(&INFOBOX_HEADER)
        .next()
        .map(|header| {
            header
                .text()
                .collect::<String>()
                .replace("[e]", "")
                .replace("[h]", "")
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback_name.to_string());

    let mut role = None;
    let mut lane = None;
    for desc in doc.select(&INFOBOX_DESC) {
        let label: String = desc.text().collect::<String>().trim().to_string();
        let Some(value_div) = next_element_sibling(desc) else {
            continue;
        };
        let value = joined_text(value_div);
        match label.as_str() {
            "Role:" => role = Some(value),
            "Lane:" => lane = Some(value),
            _ => {}
        }
    }

    HeroInfo { name, role, lane }
}

fn next_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

fn joined_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
