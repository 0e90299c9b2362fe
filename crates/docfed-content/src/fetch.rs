//! Remote raw-content fetching.
//!
//! Abstracts the HTTP fetch behind [`RemoteFetcher`] so the resolver
//! can be tested without network access. The HTTP implementation applies
//! no retry or timeout policy; a failed request propagates to the caller.

use async_trait::async_trait;

use docfed_core::{Error, Result};

/// Abstraction over raw-content retrieval for federated pages.
#[async_trait]
pub trait RemoteFetcher: Send + Sync {
    /// Fetch a document as plain text from the given URL.
    async fn fetch_raw(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by a shared `reqwest` client.
#[derive(Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a fresh client.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RemoteFetcher for HttpFetcher {
    async fn fetch_raw(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e))?;

        if !response.status().is_success() {
            return Err(Error::fetch_msg(
                url,
                format!("unexpected status {}", response.status()),
            ));
        }

        response.text().await.map_err(|e| Error::fetch(url, e))
    }
}

/// In-memory fetcher for tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::collections::HashMap;

    use super::*;

    /// Fetcher returning canned page bodies keyed by URL.
    #[derive(Clone, Default)]
    pub struct MockFetcher {
        pages: HashMap<String, String>,
    }

    impl MockFetcher {
        /// Create an empty mock fetcher.
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a canned response for a URL.
        pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
            self.pages.insert(url.into(), body.into());
            self
        }
    }

    #[async_trait]
    impl RemoteFetcher for MockFetcher {
        async fn fetch_raw(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| Error::fetch_msg(url, "no canned response"))
        }
    }
}
