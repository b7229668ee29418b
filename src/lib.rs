pub mod aggregate;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod heroes;
pub mod live_stats;
pub mod output;
pub mod proxy;
pub mod registry;
pub mod roster;
pub mod scrape;
pub mod types;

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
