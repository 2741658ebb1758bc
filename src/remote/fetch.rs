//! Fetching raw file content from the remote source host.
//!
//! `fetch_first_available` walks the resolver's candidates strictly in order
//! and stops at the first one the host answers. Transport failures move on
//! to the next candidate; a broken body on the winning response aborts.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::error::{AppError, Result};
use crate::models::{CandidateUrl, FetchResult};

#[derive(Error, Debug)]
pub enum FetchError {
    /// No response arrived; the next candidate is tried.
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// Response arrived but the status policy rejected it.
    #[error("rejected with HTTP {0}")]
    Rejected(u16),

    /// Response arrived but its body could not be read.
    #[error("failed to read body: {0}")]
    Body(String),
}

/// Which responses count as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Any response is a hit, the status code is never inspected.
    #[default]
    AcceptAny,
    /// Only 2xx responses are hits.
    RequireSuccess,
}

#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// GET `url` and return its body as text.
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
    policy: StatusPolicy,
}

impl HttpFetcher {
    pub fn new(policy: StatusPolicy) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, policy))
    }

    pub fn with_client(client: Client, policy: StatusPolicy) -> Self {
        Self { client, policy }
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        let status = response.status();
        if self.policy == StatusPolicy::RequireSuccess && !status.is_success() {
            return Err(FetchError::Rejected(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

pub async fn fetch_first_available(
    fetcher: &dyn SourceFetcher,
    candidates: &[CandidateUrl],
) -> Result<FetchResult> {
    for candidate in candidates {
        match fetcher.fetch(&candidate.url).await {
            Ok(content) => {
                tracing::info!("Fetched {} ({} bytes)", candidate.url, content.len());
                return Ok(FetchResult {
                    url: candidate.url.clone(),
                    dialect: candidate.dialect,
                    content,
                });
            }
            Err(FetchError::Body(reason)) => {
                return Err(AppError::Upstream(format!("{}: {}", candidate.url, reason)));
            }
            Err(e) => {
                tracing::debug!("Skipping {}: {}", candidate.url, e);
            }
        }
    }

    Err(AppError::FileNotFound)
}
