//! CLI argument parsing and command definitions.
//!
//! Defines the `docfed` argument surface: configuration, verbosity, and
//! the base commands (serve, paths, sync, rewrite, config, version,
//! health).

use clap::{Parser, Subcommand, ValueEnum};

use docfed_sync::SyncTarget;

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments for the docfed binary.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "DOCFED_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Built-in docfed commands.
#[derive(Subcommand, Debug)]
pub enum BaseCommand {
    /// Start the documentation server.
    Serve {
        /// Port to listen on (overrides the configured port).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List every routable documentation path.
    Paths,

    /// Toggle an environment-sync target for the configured connection.
    Sync {
        /// Target environment to toggle.
        #[arg(value_enum)]
        target: TargetArg,

        /// Disable the target instead of enabling it.
        #[arg(long)]
        off: bool,
    },

    /// Rewrite a single hyperlink the way federated content links are rewritten.
    Rewrite {
        /// Link to rewrite (relative, `.md`-suffixed, or absolute).
        href: String,
    },

    /// Print version information.
    Version,

    /// Check system health.
    Health,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Sync target as a CLI value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    /// The production deployment.
    Production,
    /// Preview deployments.
    Preview,
    /// Local development.
    Development,
}

impl From<TargetArg> for SyncTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Production => SyncTarget::Production,
            TargetArg::Preview => SyncTarget::Preview,
            TargetArg::Development => SyncTarget::Development,
        }
    }
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "server.port").
        key: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["test"]);
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_verbose() {
        let args = CliArgs::parse_from(["test", "--verbose"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_args_config() {
        let args = CliArgs::parse_from(["test", "--config", "/path/to/config.toml"]);
        assert_eq!(args.config, Some("/path/to/config.toml".to_string()));
    }

    #[test]
    fn test_serve_command_default_port() {
        let args = CliArgs::parse_from(["test", "serve"]);
        match args.command {
            Some(BaseCommand::Serve { port }) => assert!(port.is_none()),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_serve_command_custom_port() {
        let args = CliArgs::parse_from(["test", "serve", "--port", "8080"]);
        match args.command {
            Some(BaseCommand::Serve { port }) => assert_eq!(port, Some(8080)),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_paths_command() {
        let args = CliArgs::parse_from(["test", "paths"]);
        assert!(matches!(args.command, Some(BaseCommand::Paths)));
    }

    #[test]
    fn test_sync_command_enables_by_default() {
        let args = CliArgs::parse_from(["test", "sync", "production"]);
        match args.command {
            Some(BaseCommand::Sync { target, off }) => {
                assert_eq!(target, TargetArg::Production);
                assert!(!off);
            }
            _ => panic!("Expected Sync command"),
        }
    }

    #[test]
    fn test_sync_command_off() {
        let args = CliArgs::parse_from(["test", "sync", "preview", "--off"]);
        match args.command {
            Some(BaseCommand::Sync { target, off }) => {
                assert_eq!(target, TargetArg::Preview);
                assert!(off);
            }
            _ => panic!("Expected Sync command with off"),
        }
    }

    #[test]
    fn test_target_arg_conversion() {
        assert_eq!(SyncTarget::from(TargetArg::Production), SyncTarget::Production);
        assert_eq!(SyncTarget::from(TargetArg::Preview), SyncTarget::Preview);
        assert_eq!(
            SyncTarget::from(TargetArg::Development),
            SyncTarget::Development
        );
    }

    #[test]
    fn test_rewrite_command() {
        let args = CliArgs::parse_from(["test", "rewrite", "s3.md#usage"]);
        match args.command {
            Some(BaseCommand::Rewrite { href }) => assert_eq!(href, "s3.md#usage"),
            _ => panic!("Expected Rewrite command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["test", "version"]);
        assert!(matches!(args.command, Some(BaseCommand::Version)));
    }

    #[test]
    fn test_health_command() {
        let args = CliArgs::parse_from(["test", "health"]);
        assert!(matches!(args.command, Some(BaseCommand::Health)));
    }

    #[test]
    fn test_config_path_command() {
        let args = CliArgs::parse_from(["test", "config", "path"]);
        match args.command {
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigAction::Path,
            })) => {}
            _ => panic!("Expected Config Path command"),
        }
    }

    #[test]
    fn test_config_get_command() {
        let args = CliArgs::parse_from(["test", "config", "get", "server.port"]);
        match args.command {
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigAction::Get { key },
            })) => {
                assert_eq!(key, "server.port");
            }
            _ => panic!("Expected Config Get command"),
        }
    }

    #[test]
    fn test_config_init_command() {
        let args = CliArgs::parse_from(["test", "config", "init"]);
        match args.command {
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert!(file.is_none());
                assert!(!force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let args = CliArgs::parse_from(["test", "config", "init", "--force"]);
        match args.command {
            Some(BaseCommand::Config(ConfigCommand {
                command: ConfigAction::Init { force, .. },
            })) => {
                assert!(force);
            }
            _ => panic!("Expected Config Init command with force"),
        }
    }
}
