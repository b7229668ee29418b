use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Proxy, StatusCode};
use tracing::warn;

use crate::config::ScrapeConfig;
use crate::proxy::ProxyRotator;

/// HTTP fetcher with per-attempt proxy rotation and exponential backoff.
///
/// One blocking client is built per proxy endpoint up front; each attempt
/// takes the next client in round-robin order, so retries land on a
/// different proxy than the failed attempt.
pub struct Fetcher {
    clients: Vec<Client>,
    rotator: ProxyRotator,
    max_retries: u32,
    base_delay: Duration,
    backoff_factor: f64,
}

impl Fetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let rotator = ProxyRotator::new(config.proxies.clone())?;
        let headers = build_headers(config)?;
        let mut clients = Vec::with_capacity(rotator.len());
        for endpoint in rotator.endpoints() {
            clients.push(build_client(config, &headers, endpoint)?);
        }
        Ok(Self {
            clients,
            rotator,
            max_retries: config.max_retries,
            base_delay: config.base_delay,
            backoff_factor: config.backoff_factor,
        })
    }

    pub fn rotator(&self) -> &ProxyRotator {
        &self.rotator
    }

    /// Fetches `url`, retrying up to the configured attempt count. Returns
    /// the response body on the first 200, `None` after exhausting retries.
    /// Failure reasons are logged, not propagated.
    pub fn get(&self, url: &str) -> Option<String> {
        let mut delay = self.base_delay;
        for attempt in 1..=self.max_retries {
            let (idx, endpoint) = self.rotator.next();
            match self.clients[idx].get(url).send() {
                Ok(resp) if resp.status() == StatusCode::OK => match resp.text() {
                    Ok(body) => return Some(body),
                    Err(err) => {
                        warn!("body read failed for {url} via {endpoint}: {err}");
                    }
                },
                Ok(resp) => {
                    warn!(
                        "attempt {attempt}/{} for {url} via {endpoint}: http {}",
                        self.max_retries,
                        resp.status()
                    );
                }
                Err(err) => {
                    warn!(
                        "attempt {attempt}/{} for {url} via {endpoint}: {err}",
                        self.max_retries
                    );
                }
            }
            if attempt < self.max_retries {
                thread::sleep(delay);
                delay = delay.mul_f64(self.backoff_factor);
            }
        }
        warn!("giving up on {url} after {} attempts", self.max_retries);
        None
    }
}

fn build_headers(config: &ScrapeConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .with_context(|| format!("invalid header name: {name}"))?;
        let value = HeaderValue::from_str(value).context("invalid header value")?;
        headers.insert(name, value);
    }
    if !config.cookie.is_empty() {
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&config.cookie).context("invalid cookie value")?,
        );
    }
    Ok(headers)
}

fn build_client(config: &ScrapeConfig, headers: &HeaderMap, endpoint: &str) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout)
        .default_headers(headers.clone())
        .proxy(
            Proxy::all(format!("http://{endpoint}"))
                .with_context(|| format!("invalid proxy endpoint: {endpoint}"))?,
        )
        .build()
        .context("failed to build http client")
}
