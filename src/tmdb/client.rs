use async_trait::async_trait;
use std::error::Error as _;
use std::time::Duration;
use tracing::{debug, warn};

use super::backoff::retry_delay;
use super::types::{SearchResponse, UpstreamMovie};
use crate::config::TmdbConfig;

const MAX_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Source of movie search results.
#[async_trait]
pub trait MovieSearch: Send + Sync {
    /// At most `limit` entries from the first page of results for `query`,
    /// in upstream order. Entries past `limit` are never decoded.
    async fn search_movies(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<UpstreamMovie>, UpstreamError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    #[error("upstream request failed: {0}")]
    Transport(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("invalid upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    fn transport(err: reqwest::Error) -> Self {
        // The request URL carries the API key; keep it out of the message.
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        UpstreamError::Transport(message)
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, UpstreamError::Transport(_))
    }
}

/// Client for the TMDB `search/movie` endpoint.
pub struct TmdbClient {
    http: reqwest::Client,
    api_base_url: String,
    api_key: String,
    retries: u32,
    retry_backoff: Duration,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig, api_key: &str) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            retries: config.retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    async fn fetch_page(&self, query: &str) -> Result<SearchResponse, UpstreamError> {
        let url = format!("{}/search/movie", self.api_base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", "en-US"),
                ("query", query),
                ("page", "1"),
                ("include_adult", "false"),
            ])
            .send()
            .await
            .map_err(UpstreamError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(UpstreamError::transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MovieSearch for TmdbClient {
    async fn search_movies(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<UpstreamMovie>, UpstreamError> {
        let mut attempt = 0;
        loop {
            debug!(query = %query, attempt = attempt, "TMDB search");

            match self.fetch_page(query).await {
                Ok(page) => return decode_results(page, limit),
                Err(e) if e.is_retryable() && attempt < self.retries => {
                    attempt += 1;
                    let delay = retry_delay(attempt, self.retry_backoff, MAX_RETRY_DELAY);
                    warn!("TMDB search failed, retrying in {:?}: {}", delay, e);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn decode_results(
    page: SearchResponse,
    limit: usize,
) -> Result<Vec<UpstreamMovie>, UpstreamError> {
    page.results
        .into_iter()
        .take(limit)
        .map(|entry| serde_json::from_value(entry).map_err(UpstreamError::from))
        .collect()
}
