//! Application state management.
//!
//! Provides [`AppState<C>`], a thread-safe container for shared
//! application state that is generic over the configuration provider.
//! docfed keeps this intentionally minimal — it holds only the
//! configuration; the content and sync crates own their own per-request
//! state.

use std::sync::Arc;

use crate::traits::ConfigProvider;

/// Thread-safe shared application state.
///
/// Generic over `C: ConfigProvider` so binaries can use it with their
/// own configuration type. The configuration is wrapped in an `Arc` for
/// cheap cloning; multiple request handlers can share the same state
/// concurrently.
#[derive(Debug)]
pub struct AppState<C: ConfigProvider> {
    config: Arc<C>,
}

impl<C: ConfigProvider> AppState<C> {
    /// Create a new state wrapping the given configuration.
    pub fn new(config: C) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Create state from an existing Arc-wrapped configuration.
    pub fn from_arc(config: Arc<C>) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Get a cloneable handle to the configuration.
    pub fn config_arc(&self) -> Arc<C> {
        Arc::clone(&self.config)
    }

    /// Get the project name from the configuration.
    pub fn project_name(&self) -> &str {
        self.config.project_name()
    }
}

impl<C: ConfigProvider> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
        }
    }
}
