//! Command-line interface for docfed.
//!
//! Provides the `docfed` binary: configuration loading, logging init,
//! and the serve / paths / sync / rewrite / config commands.

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::DocfedCli;
pub use cli::{BaseCommand, CliArgs, ConfigAction, ConfigCommand, TargetArg};
pub use config::{ContentConfig, DocfedConfig, ServerConfig, SyncConfig};
