use anyhow::{Result, bail};
use std::time::Duration;

/// Release metadata endpoint. `https://golang.org/dl/?mode=json` redirects here.
pub const DEFAULT_URL: &str = "https://go.dev/dl/?mode=json";

/// Client-side timeout for the whole request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Where and how long to look for release metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let url = url.unwrap_or_else(|| DEFAULT_URL.to_string());
        if url.trim().is_empty() {
            bail!("Metadata URL must not be empty");
        }

        let timeout_secs = timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            bail!("Timeout must be at least one second");
        }

        Ok(Self {
            url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
