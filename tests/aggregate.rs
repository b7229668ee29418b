use std::collections::HashMap;
use std::fs;

use mlbb_meta::aggregate::{aggregate_rows, read_master_csv, read_roles_csv, tier_label};
use mlbb_meta::output::MasterCsv;
use mlbb_meta::types::HeroStatRow;

fn row(hero: &str, picks: u32, wins: u32, losses: u32, bans: u32, title: &str) -> HeroStatRow {
    HeroStatRow {
        hero: hero.to_string(),
        pick_total: picks,
        pick_wins: wins,
        pick_losses: losses,
        ban_count: bans,
        win_rate: 0.0,
        tournament_year: 2024,
        tournament_title: title.to_string(),
        tournament_url: format!("https://liquipedia.net/mobilelegends/{title}"),
    }
}

#[test]
fn sums_hero_totals_across_tournaments() {
    let rows = vec![
        row("Lancelot", 120, 70, 50, 40, "MPL_A"),
        row("Lancelot", 80, 50, 30, 10, "MPL_B"),
        row("Chou", 90, 50, 40, 25, "MPL_A"),
    ];
    let mut roles = HashMap::new();
    roles.insert("Lancelot".to_string(), "Assassin".to_string());

    let aggregates = aggregate_rows(&rows, &roles);
    assert_eq!(aggregates.len(), 2);

    let lancelot = &aggregates[0];
    assert_eq!(lancelot.hero, "Lancelot");
    assert_eq!(lancelot.role, "Assassin");
    assert_eq!(lancelot.tournaments, 2);
    assert_eq!(lancelot.total_picks, 200);
    assert_eq!(lancelot.total_wins, 120);
    assert_eq!(lancelot.total_losses, 80);
    assert_eq!(lancelot.total_bans, 50);
    assert_eq!(lancelot.overall_win_rate, 60.0);
    assert_eq!(lancelot.ban_rate, 20.0);

    let chou = &aggregates[1];
    assert_eq!(chou.hero, "Chou");
    assert_eq!(chou.role, "");
}

#[test]
fn orders_by_picks_then_name() {
    let rows = vec![
        row("Chou", 50, 25, 25, 0, "MPL_A"),
        row("Angela", 50, 30, 20, 0, "MPL_A"),
        row("Fanny", 90, 50, 40, 0, "MPL_A"),
    ];
    let aggregates = aggregate_rows(&rows, &HashMap::new());
    let names: Vec<&str> = aggregates.iter().map(|a| a.hero.as_str()).collect();
    assert_eq!(names, vec!["Fanny", "Angela", "Chou"]);
}

#[test]
fn same_tournament_counted_once_across_tables() {
    // A statistics page can list a hero in more than one table; the
    // tournament count goes by distinct title.
    let rows = vec![
        row("Lancelot", 60, 35, 25, 20, "MPL_A"),
        row("Lancelot", 60, 35, 25, 20, "MPL_A"),
        row("Lancelot", 80, 50, 30, 10, "MPL_B"),
    ];
    let aggregates = aggregate_rows(&rows, &HashMap::new());
    assert_eq!(aggregates[0].tournaments, 2);
    assert_eq!(aggregates[0].total_picks, 200);
    assert_eq!(aggregates[0].total_bans, 50);
}

#[test]
fn ban_only_hero_gets_full_ban_rate() {
    let rows = vec![row("Khufra", 0, 0, 0, 30, "MPL_A")];
    let aggregates = aggregate_rows(&rows, &HashMap::new());
    assert_eq!(aggregates[0].overall_win_rate, 0.0);
    assert_eq!(aggregates[0].ban_rate, 100.0);
}

#[test]
fn tier_thresholds() {
    assert_eq!(tier_label(1001, 0, 52.01, 0.0), "META");
    assert_eq!(tier_label(1000, 600, 52.01, 41.0), "PRIORITY BAN");
    assert_eq!(tier_label(501, 0, 47.99, 0.0), "POPULAR BUT WEAK");
    assert_eq!(tier_label(100, 0, 54.01, 0.0), "HIGH WIN RATE");
    assert_eq!(tier_label(100, 0, 54.0, 0.0), "SITUATIONAL");
    // Exactly at the META cut falls through to the later checks.
    assert_eq!(tier_label(1001, 0, 52.0, 0.0), "SITUATIONAL");
}

#[test]
fn master_csv_round_trips() {
    let path = std::env::temp_dir().join(format!("mlbb_agg_{}.csv", std::process::id()));
    let written = vec![
        row("Lancelot", 120, 70, 50, 40, "MPL_A"),
        row("Chou", 90, 50, 40, 25, "MPL_B"),
    ];
    {
        let mut master = MasterCsv::create(&path).expect("create master csv");
        master.append(&written).expect("append rows");
    }
    let read = read_master_csv(&path).expect("read master csv");
    assert_eq!(read, written);
    let _ = fs::remove_file(&path);
}

#[test]
fn roles_csv_takes_primary_role() {
    let path = std::env::temp_dir().join(format!("mlbb_roles_{}.csv", std::process::id()));
    fs::write(
        &path,
        "Name,Role,Lane\nAkai,\"Tank, Support\",Roam\nLancelot,Assassin,Jungle\nGhost,,\n",
    )
    .expect("write roles csv");
    let roles = read_roles_csv(&path).expect("read roles csv");
    assert_eq!(roles.get("Akai").map(String::as_str), Some("Tank"));
    assert_eq!(roles.get("Lancelot").map(String::as_str), Some("Assassin"));
    assert!(!roles.contains_key("Ghost"));
    let _ = fs::remove_file(&path);
}
