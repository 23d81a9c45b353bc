//! The article fetch capability.
//!
//! Fetching is an injected dependency behind the [`Fetcher`] trait so the
//! pipeline can be exercised with canned, failing or stalling stubs. The
//! production implementation wraps a shared [`reqwest::Client`].

use std::future::Future;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

/// Errors surfaced while fetching an article.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Connection failure or a non-success HTTP status.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Fetches the text content of a URL, failing on connection errors and
/// non-success statuses.
///
/// Shared read-only across all concurrent article workers.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Production fetcher backed by a pooled [`reqwest::Client`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Fetcher for ReqwestFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = Url::parse(url)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        debug!(bytes = body.len(), "Fetched article body");
        Ok(body)
    }
}
