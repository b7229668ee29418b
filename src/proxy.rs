use std::sync::Mutex;

use anyhow::{Result, anyhow};

/// Round-robin selector over a fixed pool of `host:port` proxy endpoints.
/// The cursor is the only mutable state and sits behind a single lock.
pub struct ProxyRotator {
    endpoints: Vec<String>,
    cursor: Mutex<usize>,
}

impl ProxyRotator {
    pub fn new(endpoints: Vec<String>) -> Result<Self> {
        if endpoints.is_empty() {
            return Err(anyhow!("proxy pool must not be empty"));
        }
        Ok(Self {
            endpoints,
            cursor: Mutex::new(0),
        })
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        // Non-empty by construction.
        false
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// Hands out the next endpoint and its pool index.
    pub fn next(&self) -> (usize, &str) {
        let mut cursor = self.cursor.lock().expect("proxy cursor lock poisoned");
        let idx = *cursor;
        *cursor = (idx + 1) % self.endpoints.len();
        (idx, self.endpoints[idx].as_str())
    }
}
