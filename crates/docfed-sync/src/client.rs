//! Integration update client.
//!
//! The remote integration stores each connection's sync configuration;
//! updates replace the full target list. [`IntegrationApi`] abstracts
//! the mutation endpoint so the form can be tested without network
//! access.

use async_trait::async_trait;
use serde::Serialize;

use docfed_core::{Error, Result};

use crate::targets::SyncTarget;

/// Full-replacement update for one integration connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConnectionRequest {
    /// Connection identifier.
    pub id: String,
    /// Owning organization-level integration identifier.
    pub organization_integration_id: String,
    /// Complete replacement list of enabled sync targets.
    pub env_sync_targets: Vec<SyncTarget>,
}

/// Abstraction over the integration's connection-update mutation.
#[async_trait]
pub trait IntegrationApi: Send + Sync {
    /// Submit a full-replacement connection update.
    async fn update_connection(&self, request: &UpdateConnectionRequest) -> Result<()>;
}

/// HTTP client for the integration update endpoint.
pub struct HttpIntegrationApi {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpIntegrationApi {
    /// Create a client for the given mutation endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[async_trait]
impl IntegrationApi for HttpIntegrationApi {
    async fn update_connection(&self, request: &UpdateConnectionRequest) -> Result<()> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::fetch(&self.endpoint, e))?;

        if !response.status().is_success() {
            return Err(Error::fetch_msg(
                &self.endpoint,
                format!("unexpected status {}", response.status()),
            ));
        }

        tracing::debug!(connection = %request.id, targets = request.env_sync_targets.len(),
            "sync targets updated");
        Ok(())
    }
}

/// In-memory API doubles for tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use super::*;

    /// API double that records every submitted request.
    #[derive(Clone, Default)]
    pub struct RecordingApi {
        submitted: Arc<Mutex<Vec<UpdateConnectionRequest>>>,
        fail: bool,
    }

    impl RecordingApi {
        /// Create a recorder that accepts every update.
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a recorder that rejects every update.
        pub fn failing() -> Self {
            Self {
                submitted: Arc::default(),
                fail: true,
            }
        }

        /// Requests submitted so far, in order.
        pub async fn submitted(&self) -> Vec<UpdateConnectionRequest> {
            self.submitted.lock().await.clone()
        }
    }

    #[async_trait]
    impl IntegrationApi for RecordingApi {
        async fn update_connection(&self, request: &UpdateConnectionRequest) -> Result<()> {
            if self.fail {
                return Err(Error::fetch_msg("mock://integration", "update rejected"));
            }
            self.submitted.lock().await.push(request.clone());
            Ok(())
        }
    }
}
