use std::fs;
use std::path::PathBuf;

use mlbb_meta::live_stats::parse_hero_statistics_json;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_ranked_statistics_fixture() {
    let snapshots =
        parse_hero_statistics_json(&read_fixture("hero_statistics.json")).expect("fixture parses");
    assert_eq!(snapshots.len(), 3);

    let aamon = &snapshots[0];
    assert_eq!(aamon.hero_id, 109);
    assert_eq!(aamon.hero_name, "Aamon");
    assert_eq!(aamon.role, "Assassin");
    assert_eq!(aamon.lane, "Jungle");
    assert_eq!(aamon.speciality, "Chase, Magic Damage");
    assert_eq!(aamon.pick_rate, 0.99);
    assert_eq!(aamon.win_rate, 54.05);
    assert_eq!(aamon.ban_rate, 54.1);
}

#[test]
fn keeps_first_role_when_hero_has_several() {
    let snapshots =
        parse_hero_statistics_json(&read_fixture("hero_statistics.json")).expect("fixture parses");
    assert_eq!(snapshots[1].hero_name, "Akai");
    assert_eq!(snapshots[1].role, "Tank");
}

#[test]
fn empty_attributes_become_unknown() {
    let snapshots =
        parse_hero_statistics_json(&read_fixture("hero_statistics.json")).expect("fixture parses");
    let mystery = &snapshots[2];
    assert_eq!(mystery.role, "Unknown");
    assert_eq!(mystery.lane, "Unknown");
    assert_eq!(mystery.speciality, "Unknown");
}

#[test]
fn rejects_empty_and_null_bodies() {
    assert!(parse_hero_statistics_json("").is_err());
    assert!(parse_hero_statistics_json("  null  ").is_err());
}

#[test]
fn rejects_unsuccessful_responses() {
    let err = parse_hero_statistics_json(r#"{"success": false, "data": []}"#)
        .expect_err("failure flag should error");
    assert!(err.to_string().contains("unsuccessful"));
}
