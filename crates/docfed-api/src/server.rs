//! Axum router and server entry point.
//!
//! Three routes:
//!
//! * `GET /docs` - resolve the index page
//! * `GET /docs/{*path}` - resolve a nested or federated page
//! * `GET /api/paths` - enumerate every routable segment list
//!
//! Handlers return the resolved page as JSON. Errors map onto status
//! codes: missing pages are 404, upstream fetch failures are 502,
//! everything else is 500.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use docfed_content::{enumerate_static_paths, ContentResolver, RemoteFetcher, ResolvedPage};
use docfed_core::{Error, Result};

/// Shared state for the documentation routes.
pub struct DocServerState<F: RemoteFetcher> {
    /// Resolver for local and federated pages.
    pub resolver: ContentResolver<F>,
}

impl<F: RemoteFetcher> DocServerState<F> {
    /// Wrap a resolver in server state.
    pub fn new(resolver: ContentResolver<F>) -> Self {
        Self { resolver }
    }
}

/// Bind address configuration for [`serve`].
#[derive(Debug, Clone)]
pub struct DocServerConfig {
    /// Host to bind on.
    pub host: String,
    /// Port to bind on.
    pub port: u16,
}

impl Default for DocServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Build the documentation router.
pub fn doc_router<F: RemoteFetcher + 'static>(state: Arc<DocServerState<F>>) -> Router {
    Router::new()
        .route("/docs", get(index_handler))
        .route("/docs/{*path}", get(page_handler))
        .route("/api/paths", get(paths_handler))
        .with_state(state)
}

/// Bind a TCP listener and serve the documentation router until shutdown.
pub async fn serve<F: RemoteFetcher + 'static>(
    state: DocServerState<F>,
    config: DocServerConfig,
) -> std::io::Result<()> {
    let app = doc_router(Arc::new(state));
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("docfed server listening on http://{addr}");
    axum::serve(listener, app).await
}

async fn index_handler<F: RemoteFetcher + 'static>(
    State(state): State<Arc<DocServerState<F>>>,
) -> Response {
    page_response(state.resolver.resolve(&[]).await)
}

async fn page_handler<F: RemoteFetcher + 'static>(
    State(state): State<Arc<DocServerState<F>>>,
    Path(path): Path<String>,
) -> Response {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    page_response(state.resolver.resolve(&segments).await)
}

async fn paths_handler<F: RemoteFetcher + 'static>(
    State(state): State<Arc<DocServerState<F>>>,
) -> Response {
    match enumerate_static_paths(state.resolver.content_dir(), state.resolver.registry()).await {
        Ok(paths) => Json(json!({ "paths": paths })).into_response(),
        Err(err) => error_response(&err),
    }
}

fn page_response(result: Result<ResolvedPage>) -> Response {
    match result {
        Ok(page) => Json(page).into_response(),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &Error) -> Response {
    let status = error_status(err);
    if status.is_server_error() {
        tracing::error!(%err, "request failed");
    } else {
        tracing::debug!(%err, "request failed");
    }
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

fn error_status(err: &Error) -> StatusCode {
    if err.is_not_found() {
        return StatusCode::NOT_FOUND;
    }
    match err {
        Error::Fetch { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
