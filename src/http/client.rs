//! Single-attempt HTTP client for the release metadata endpoint.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, log_enabled, trace};
use reqwest::Client;

use crate::config::Config;

/// A successfully retrieved metadata document.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    /// Status line, e.g. "200 OK"
    pub status: String,
    pub body: Vec<u8>,
}

/// The metadata endpoint could not be reached or answered with a non-2xx status.
#[derive(Debug)]
pub struct TransportError {
    pub url: String,
    source: reqwest::Error,
}

impl TransportError {
    fn new(url: &str, source: reqwest::Error) -> Self {
        Self {
            url: url.to_string(),
            source,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }

    pub fn status(&self) -> Option<u16> {
        self.source.status().map(|s| s.as_u16())
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_timeout() {
            write!(f, "Timed out retrieving release metadata from {}", self.url)
        } else if let Some(status) = self.status() {
            write!(
                f,
                "Release metadata request to {} failed with HTTP {}",
                self.url, status
            )
        } else {
            write!(f, "Problem retrieving release metadata from {}", self.url)
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FetchMetadata: Send + Sync {
    /// Retrieves the raw metadata document. Never retried.
    async fn fetch(&self) -> Result<Fetched, TransportError>;
}

/// Fetches release metadata from a fixed URL with a bounded timeout.
pub struct MetadataFetcher {
    client: Client,
    url: String,
}

impl MetadataFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("golatest/", env!("GOLATEST_VERSION")))
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl FetchMetadata for MetadataFetcher {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self) -> Result<Fetched, TransportError> {
        debug!("GET {}...", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| TransportError::new(&self.url, e))?;

        let status = response.status().to_string();
        info!("Response status: {}", status);

        // Consuming the body releases the connection on every path
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(&self.url, e))?
            .to_vec();

        if log_enabled!(log::Level::Trace) {
            trace!("Response body: {}", String::from_utf8_lossy(&body));
        }

        Ok(Fetched { status, body })
    }
}
