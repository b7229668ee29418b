use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Canonical MLBB hero roster. Table rows whose name cell resolves to
/// anything outside this set (team names, tournament links) are dropped.
pub const VALID_HEROES: &[&str] = &[
    "Akai",
    "Alucard",
    "Aulus",
    "Bane",
    "Aldous",
    "Balmond",
    "Angela",
    "Atlas",
    "Alpha",
    "Alice",
    "Badang",
    "Arlott",
    "Aamon",
    "Aurora",
    "Argus",
    "Baxia",
    "Barats",
    "Beatrix",
    "Benedetta",
    "Belerick",
    "Brody",
    "Bruno",
    "Carmilla",
    "Cecilion",
    "Cici",
    "Chip",
    "Chang'e",
    "Clint",
    "Chou",
    "Claude",
    "Cyclops",
    "Diggie",
    "Dyrroth",
    "Edith",
    "Esmeralda",
    "Eudora",
    "Estes",
    "Fanny",
    "Faramis",
    "Floryn",
    "Gord",
    "Grock",
    "Granger",
    "Gloo",
    "Franco",
    "Fredrinn",
    "Gatotkaca",
    "Freya",
    "Gusion",
    "Guinevere",
    "Hanzo",
    "Hanabi",
    "Harith",
    "Harley",
    "Hayabusa",
    "Hilda",
    "Helcurt",
    "Hylos",
    "Jawhead",
    "Ixia",
    "Johnson",
    "Irithel",
    "Joy",
    "Kadita",
    "Julian",
    "Kalea",
    "Kagura",
    "Kaja",
    "Karina",
    "Karrie",
    "Khaleed",
    "Khufra",
    "Kimmy",
    "Lapu-Lapu",
    "Lancelot",
    "Leomord",
    "Layla",
    "Lesley",
    "Ling",
    "Lolita",
    "Martis",
    "Luo Yi",
    "Lukas",
    "Lunox",
    "Lylia",
    "Mathilda",
    "Masha",
    "Melissa",
    "Minotaur",
    "Moskov",
    "Minsitthar",
    "Miya",
    "Nana",
    "Natalia",
    "Natan",
    "Nolan",
    "Obsidia",
    "Odette",
    "Paquito",
    "Novaria",
    "Pharsa",
    "Popol and Kupa",
    "Phoveus",
    "Rafaela",
    "Roger",
    "Saber",
    "Ruby",
    "Selena",
    "Silvanna",
    "Sun",
    "Suyou",
    "Terizla",
    "Thamuz",
    "Tigreal",
    "Uranus",
    "Valir",
    "Valentina",
    "Vale",
    "Vexana",
    "Wanwan",
    "X.Borg",
    "Yi Sun-shin",
    "Xavier",
    "Yin",
    "Yu Zhong",
    "Yve",
    "Zetian",
    "Zhask",
    "Zhuxin",
    "Zilong",
    // Alternative spelling seen on some statistics pages.
    "Popol & Kupa",
];

static BY_LOWER: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    VALID_HEROES
        .iter()
        .map(|hero| (hero.to_lowercase(), *hero))
        .collect()
});

/// Resolves a scraped name to its canonical spelling: exact members come
/// back unchanged, otherwise a case-insensitive match canonicalizes.
/// `None` means the name is not a hero.
pub fn canonical_hero(name: &str) -> Option<&'static str> {
    BY_LOWER.get(&name.to_lowercase()).copied()
}
