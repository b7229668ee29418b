use std::fs;
use std::path::PathBuf;

use scraper::Html;

use mlbb_meta::extract::{document_tables, extract_document, win_rate};
use mlbb_meta::registry::SourceRecord;

const SOURCE: SourceRecord = SourceRecord {
    year: 2024,
    title: "MPL Test Season 1",
    url: "https://liquipedia.net/mobilelegends/MPL/Test/1/Statistics",
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn finds_both_tables() {
    let doc = Html::parse_document(&read_fixture("stats_page.html"));
    assert_eq!(document_tables(&doc).len(), 2);
}

#[test]
fn extracts_hero_rows_in_document_order() {
    let doc = Html::parse_document(&read_fixture("stats_page.html"));
    let rows = extract_document(&doc, &SOURCE);
    let names: Vec<&str> = rows.iter().map(|r| r.hero.as_str()).collect();
    assert_eq!(names, vec!["Lancelot", "Chou", "Fanny", "Kagura"]);
}

#[test]
fn reads_pick_and_ban_columns() {
    let doc = Html::parse_document(&read_fixture("stats_page.html"));
    let rows = extract_document(&doc, &SOURCE);
    let lancelot = &rows[0];
    assert_eq!(lancelot.pick_total, 120);
    assert_eq!(lancelot.pick_wins, 70);
    assert_eq!(lancelot.pick_losses, 50);
    assert_eq!(lancelot.ban_count, 40);
    assert_eq!(lancelot.win_rate, 58.33);
    assert_eq!(lancelot.tournament_year, 2024);
    assert_eq!(lancelot.tournament_title, "MPL Test Season 1");
}

#[test]
fn canonicalizes_lowercase_hero_names() {
    let doc = Html::parse_document(&read_fixture("stats_page.html"));
    let rows = extract_document(&doc, &SOURCE);
    assert_eq!(rows[1].hero, "Chou");
    assert_eq!(rows[1].win_rate, 55.56);
}

#[test]
fn parses_thousands_separators() {
    let doc = Html::parse_document(&read_fixture("stats_page.html"));
    let rows = extract_document(&doc, &SOURCE);
    let fanny = &rows[2];
    assert_eq!(fanny.pick_total, 1204);
    assert_eq!(fanny.ban_count, 1024);
    assert_eq!(fanny.win_rate, 58.14);
}

#[test]
fn strips_edit_annotations_from_link_titles() {
    let doc = Html::parse_document(&read_fixture("stats_page.html"));
    let rows = extract_document(&doc, &SOURCE);
    let kagura = &rows[3];
    assert_eq!(kagura.hero, "Kagura");
    assert_eq!(kagura.pick_total, 10);
    assert_eq!(kagura.ban_count, 5);
    assert_eq!(kagura.win_rate, 40.0);
}

#[test]
fn drops_team_zero_pick_and_short_rows() {
    let doc = Html::parse_document(&read_fixture("stats_page.html"));
    let rows = extract_document(&doc, &SOURCE);
    // Team Liquid links to a team page, Miya has no pick data, Gusion's row
    // is truncated, and the second table's event row has no hero link.
    for dropped in ["Team Liquid", "Miya", "Gusion", "MPL Indonesia"] {
        assert!(rows.iter().all(|r| r.hero != dropped), "{dropped} kept");
    }
}

#[test]
fn extraction_is_deterministic() {
    let raw = read_fixture("stats_page.html");
    let first = extract_document(&Html::parse_document(&raw), &SOURCE);
    let second = extract_document(&Html::parse_document(&raw), &SOURCE);
    assert_eq!(first, second);
}

#[test]
fn win_rate_rounds_to_two_decimals() {
    assert_eq!(win_rate(70, 120), 58.33);
    assert_eq!(win_rate(1, 3), 33.33);
    assert_eq!(win_rate(2, 3), 66.67);
    // Exact ties round half away from zero.
    assert_eq!(win_rate(1, 32), 3.13);
    assert_eq!(win_rate(0, 0), 0.0);
    assert_eq!(win_rate(5, 0), 0.0);
}
