//! Configuration for the docfed binary.
//!
//! Provides the [`DocfedConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `DOCFED_CONFIG` environment variable
//! 3. XDG default: `~/.config/docfed/config.toml`
//! 4. Built-in defaults

use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use docfed_content::{FederationConfig, PageMapping, PageRegistry};
use docfed_core::{ConfigProvider, Error, Result};
use docfed_sync::SyncTarget;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the docfed binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocfedConfig {
    /// Project name, used for env var prefixes and default paths.
    pub project_name: String,

    /// Base path for all project data.
    pub base_path: Option<String>,

    /// Content tree configuration.
    pub content: ContentConfig,

    /// Federated documentation source.
    pub federation: FederationConfig,

    /// Server configuration.
    pub server: ServerConfig,

    /// Integration sync configuration.
    pub sync: SyncConfig,

    /// Page mapping table for federated slugs.
    pub pages: Vec<PageMapping>,
}

/// Content tree configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Explicit path to the content directory. Overrides `section`.
    pub path: Option<String>,

    /// Route-relative content section under the base path.
    pub section: String,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,

    /// Host address to bind to.
    pub host: String,
}

/// Integration sync configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Connection-update endpoint of the integration.
    pub endpoint: Option<String>,

    /// Connection identifier.
    pub connection_id: Option<String>,

    /// Owning organization-level integration identifier.
    pub organization_integration_id: Option<String>,

    /// Bearer token for the endpoint.
    pub token: Option<String>,

    /// Currently stored sync targets, used to seed the form.
    pub targets: Vec<SyncTarget>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for DocfedConfig {
    fn default() -> Self {
        Self {
            project_name: "docfed".to_string(),
            base_path: None,
            content: ContentConfig::default(),
            federation: FederationConfig::default(),
            server: ServerConfig::default(),
            sync: SyncConfig::default(),
            pages: Vec::new(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            section: "database/extensions/wrappers".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl DocfedConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `DOCFED_CONFIG` env var
    /// 3. XDG default: `~/.config/docfed/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("DOCFED");
        env_opts.add_section("content");
        env_opts.add_section("federation");
        env_opts.add_section("server");
        env_opts.add_section("sync");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. DOCFED_CONFIG env var
        if let Ok(path) = std::env::var("DOCFED_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("docfed").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Build the page registry from the configured mapping table.
    pub fn registry(&self) -> PageRegistry {
        PageRegistry::new(self.pages.clone())
    }

    /// Resolve the content directory for the configured section.
    pub fn content_dir(&self) -> Result<PathBuf> {
        self.content_path(&self.content.section)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for DocfedConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(PathBuf::from(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_path(&self, section: &str) -> Result<PathBuf> {
        match &self.content.path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Ok(self.base_path()?.join(section)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
