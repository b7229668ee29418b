use std::fs;
use std::path::PathBuf;

use mlbb_meta::roster::{parse_hero_links, parse_hero_page};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn collects_hero_links_from_portal_grid() {
    let links = parse_hero_links(&read_fixture("heroes_portal.html")).expect("grid should parse");
    assert_eq!(links.len(), 4);
    assert_eq!(links[0].name, "Aamon");
    assert_eq!(links[0].url, "https://liquipedia.net/mobilelegends/Aamon");
    assert_eq!(links[3].name, "Popol and Kupa");
}

#[test]
fn missing_grid_is_an_error() {
    let err = parse_hero_links("<html><body><p>maintenance</p></body></html>")
        .expect_err("no grid should fail");
    assert!(err.to_string().contains("hero grid"));
}

#[test]
fn reads_name_role_and_lane_from_hero_page() {
    let info = parse_hero_page(&read_fixture("hero_page.html"), "fallback");
    assert_eq!(info.name, "Lancelot");
    assert_eq!(info.role.as_deref(), Some("Assassin"));
    assert_eq!(info.lane.as_deref(), Some("Jungle"));
}

#[test]
fn falls_back_to_portal_name_without_infobox() {
    let info = parse_hero_page("<html><body><p>stub page</p></body></html>", "Nolan");
    assert_eq!(info.name, "Nolan");
    assert_eq!(info.role, None);
    assert_eq!(info.lane, None);
}
