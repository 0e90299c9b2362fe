//! HTTP surface for docfed.
//!
//! Exposes the resolved-page and path-enumeration operations over an
//! axum router. Handlers are thin: they split the request path into
//! segments, delegate to [`docfed_content::ContentResolver`], and map
//! resolution errors onto status codes.

pub mod server;

pub use server::{doc_router, serve, DocServerConfig, DocServerState};
