use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PROXIES: &[&str] = &[
    "127.0.0.1:60000",
    "127.0.0.1:60001",
    "127.0.0.1:60002",
    "127.0.0.1:60003",
];

// Liquipedia wants a full browser fingerprint; bare requests get rate-limited
// much sooner.
const DEFAULT_HEADERS: &[(&str, &str)] = &[
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
    ),
    ("accept-language", "en-US,en;q=0.9,id;q=0.8,ga;q=0.7"),
    ("cache-control", "max-age=0"),
    ("priority", "u=0, i"),
    (
        "referer",
        "https://liquipedia.net/mobilelegends/MPL/Philippines/Season_1/Statistics",
    ),
    (
        "sec-ch-ua",
        "\"Chromium\";v=\"134\", \"Not:A-Brand\";v=\"24\", \"Google Chrome\";v=\"134\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "same-origin"),
    ("sec-fetch-user", "?1"),
    ("upgrade-insecure-requests", "1"),
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36",
    ),
];

const DEFAULT_COOKIES: &[(&str, &str)] = &[
    ("_pk_id.1.4442", "49e248808a9df0bd.1764516360."),
    ("AMP_MKTG_e0b3a97842", "JTdCJTdE"),
    ("_pk_ses.1.4442", "1"),
    ("_gid", "GA1.2.1907129899.1765175641"),
    ("CI", "467357707"),
    ("_ga", "GA1.1.873935266.1764516355"),
];

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub workers: usize,
    pub timeout: Duration,
    pub max_retries: u32,
    pub base_delay: Duration,
    pub backoff_factor: f64,
    pub proxies: Vec<String>,
    pub out_dir: PathBuf,
    pub master_csv: PathBuf,
    pub headers: Vec<(String, String)>,
    pub cookie: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            workers: 10,
            timeout: Duration::from_secs(20),
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            backoff_factor: 1.5,
            proxies: DEFAULT_PROXIES.iter().map(|s| (*s).to_string()).collect(),
            out_dir: PathBuf::from("tournaments"),
            master_csv: PathBuf::from("mlbb_hero_stats_master.csv"),
            headers: DEFAULT_HEADERS
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
            cookie: default_cookie(),
        }
    }
}

impl ScrapeConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.workers = env::var("MLBB_WORKERS")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(config.workers)
            .clamp(1, 32);
        if let Ok(raw) = env::var("MLBB_TIMEOUT_SECS")
            && let Ok(secs) = raw.trim().parse::<u64>()
        {
            config.timeout = Duration::from_secs(secs.clamp(1, 120));
        }
        config.max_retries = env::var("MLBB_RETRIES")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(config.max_retries)
            .clamp(1, 10);
        if let Ok(raw) = env::var("MLBB_PROXIES") {
            let proxies = parse_proxy_list(&raw);
            if !proxies.is_empty() {
                config.proxies = proxies;
            }
        }
        if let Ok(dir) = env::var("MLBB_OUT_DIR")
            && !dir.trim().is_empty()
        {
            config.out_dir = PathBuf::from(dir.trim());
        }
        if let Ok(path) = env::var("MLBB_MASTER_CSV")
            && !path.trim().is_empty()
        {
            config.master_csv = PathBuf::from(path.trim());
        }
        config
    }
}

fn parse_proxy_list(raw: &str) -> Vec<String> {
    raw.split([',', ';', ' '])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_cookie() -> String {
    DEFAULT_COOKIES
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}
