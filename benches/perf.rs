use std::collections::HashMap;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use scraper::Html;

use mlbb_meta::aggregate::aggregate_rows;
use mlbb_meta::extract::extract_document;
use mlbb_meta::heroes::{VALID_HEROES, canonical_hero};
use mlbb_meta::live_stats::parse_hero_statistics_json;
use mlbb_meta::output::{rows_to_csv, sanitize_title};
use mlbb_meta::registry::SourceRecord;
use mlbb_meta::types::HeroStatRow;

const SOURCE: SourceRecord = SourceRecord {
    year: 2024,
    title: "MPL Test Season 1",
    url: "https://liquipedia.net/mobilelegends/MPL/Test/1/Statistics",
};

fn sample_rows() -> Vec<HeroStatRow> {
    let mut rows = Vec::new();
    for (idx, hero) in VALID_HEROES.iter().enumerate() {
        for season in 0..8u32 {
            let picks = 40 + (idx as u32 % 60) * 10;
            let wins = picks / 2 + season;
            rows.push(HeroStatRow {
                hero: hero.to_string(),
                pick_total: picks,
                pick_wins: wins,
                pick_losses: picks - wins,
                ban_count: (idx as u32 % 30) * 12,
                win_rate: 50.0,
                tournament_year: 2018 + season as i32,
                tournament_title: format!("MPL Season {season}"),
                tournament_url: format!("https://liquipedia.net/mobilelegends/MPL/{season}"),
            });
        }
    }
    rows
}

fn bench_stats_page_parse(c: &mut Criterion) {
    c.bench_function("stats_page_parse", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(STATS_PAGE_HTML));
            let rows = extract_document(&doc, &SOURCE);
            black_box(rows.len());
        })
    });
}

fn bench_stats_extract_only(c: &mut Criterion) {
    let doc = Html::parse_document(STATS_PAGE_HTML);
    c.bench_function("stats_extract_only", |b| {
        b.iter(|| {
            let rows = extract_document(black_box(&doc), &SOURCE);
            black_box(rows.len());
        })
    });
}

fn bench_hero_canonicalize(c: &mut Criterion) {
    c.bench_function("hero_canonicalize", |b| {
        b.iter(|| {
            for hero in VALID_HEROES {
                black_box(canonical_hero(black_box(hero)));
            }
        })
    });
}

fn bench_aggregate_rows(c: &mut Criterion) {
    let rows = sample_rows();
    let mut roles = HashMap::new();
    for hero in VALID_HEROES {
        roles.insert(hero.to_string(), "Fighter".to_string());
    }
    c.bench_function("aggregate_rows", |b| {
        b.iter(|| {
            let aggregates = aggregate_rows(black_box(&rows), black_box(&roles));
            black_box(aggregates.len());
        })
    });
}

fn bench_rows_to_csv(c: &mut Criterion) {
    let rows = sample_rows();
    c.bench_function("rows_to_csv", |b| {
        b.iter(|| {
            let csv = rows_to_csv(black_box(&rows)).unwrap();
            black_box(csv.len());
        })
    });
}

fn bench_sanitize_title(c: &mut Criterion) {
    c.bench_function("sanitize_title", |b| {
        b.iter(|| {
            black_box(sanitize_title(black_box(
                "MPL Indonesia Season 13: Regular Season (Week 4) - Playoffs!",
            )));
        })
    });
}

fn bench_hero_statistics_parse(c: &mut Criterion) {
    c.bench_function("hero_statistics_parse", |b| {
        b.iter(|| {
            let snapshots = parse_hero_statistics_json(black_box(HERO_STATS_JSON)).unwrap();
            black_box(snapshots.len());
        })
    });
}

criterion_group!(
    perf,
    bench_stats_page_parse,
    bench_stats_extract_only,
    bench_hero_canonicalize,
    bench_aggregate_rows,
    bench_rows_to_csv,
    bench_sanitize_title,
    bench_hero_statistics_parse
);
criterion_main!(perf);

static STATS_PAGE_HTML: &str = include_str!("../tests/fixtures/stats_page.html");
static HERO_STATS_JSON: &str = include_str!("../tests/fixtures/hero_statistics.json");
