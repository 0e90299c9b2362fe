//! Error types for docfed operations.
//!
//! Provides a common [`Error`] type and [`Result`] alias used across all
//! docfed crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in docfed operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error with the path that triggered it.
    #[error("I/O error at {path}: {source}")]
    IoPath {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {kind} '{id}'")]
    NotFound {
        /// Kind of object that was looked up (e.g. "page").
        kind: String,
        /// Identifier that failed to resolve.
        id: String,
    },

    /// Front-matter header is missing or fails validation.
    ///
    /// Carries the offending metadata serialized as JSON so the caller
    /// can see exactly what was rejected.
    #[error("Invalid front matter: {0}")]
    InvalidFrontmatter(String),

    /// Remote fetch failed. Propagated to the caller unhandled; the
    /// resolver applies no retry or timeout policy of its own.
    #[error("Fetch failed for {url}")]
    Fetch {
        /// URL of the failed request.
        url: String,
        /// Underlying transport or status error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Create an I/O error.
    pub fn io(source: std::io::Error) -> Self {
        Self::Io(source)
    }

    /// Create an I/O error carrying the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error for an object kind and identifier.
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create an invalid front-matter error from the serialized metadata.
    pub fn invalid_frontmatter(serialized: impl Into<String>) -> Self {
        Self::InvalidFrontmatter(serialized.into())
    }

    /// Create a fetch error wrapping the underlying client error.
    pub fn fetch(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Create a fetch error from a plain message (e.g. a non-success status).
    pub fn fetch_msg(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            source: msg.into().into(),
        }
    }

    /// True if this error represents a missing page or file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            Self::IoPath { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Result type alias using docfed's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
