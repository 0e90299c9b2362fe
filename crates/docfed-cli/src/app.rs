//! DocfedCli application.
//!
//! Wires configuration, logging, and command dispatch for the `docfed`
//! binary. Generic over [`ConfigProvider`] for the pieces that do not
//! need the concrete config; command dispatch runs on
//! `DocfedCli<DocfedConfig>`.

use tracing_subscriber::EnvFilter;

use docfed_api::{DocServerConfig, DocServerState};
use docfed_content::{enumerate_static_paths, ContentResolver, HttpFetcher};
use docfed_core::{AppState, ConfigProvider, Error, Result};
use docfed_links::LinkRewriter;
use docfed_sync::{EnvSyncForm, HttpIntegrationApi, SyncTarget};

use crate::cli::{BaseCommand, CliArgs};
use crate::config::DocfedConfig;
use crate::config_handlers;

// ============================================================================
// DocfedCli
// ============================================================================

/// CLI application parameterized over a config provider.
pub struct DocfedCli<C: ConfigProvider> {
    name: String,
    state: AppState<C>,
    version: String,
}

impl DocfedCli<DocfedConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = DocfedConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> DocfedCli<C> {
    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            state: AppState::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        self.state.config()
    }

    /// Get the shared application state.
    pub fn state(&self) -> &AppState<C> {
        &self.state
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

// ============================================================================
// Command dispatch
// ============================================================================

impl DocfedCli<DocfedConfig> {
    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(BaseCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(BaseCommand::Health) => {
                println!("{}: healthy", self.name);
                Ok(())
            }
            Some(BaseCommand::Serve { port }) => self.serve(port).await,
            Some(BaseCommand::Paths) => self.print_paths().await,
            Some(BaseCommand::Sync { target, off }) => self.sync(target.into(), !off).await,
            Some(BaseCommand::Rewrite { href }) => self.rewrite(&href),
            Some(BaseCommand::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Start the documentation server.
    async fn serve(&self, port: Option<u16>) -> Result<()> {
        let config = self.config();
        let resolver = ContentResolver::new(
            config.content_dir()?,
            config.federation.clone(),
            config.registry(),
            HttpFetcher::new(),
        );
        let server_config = DocServerConfig {
            host: config.server.host.clone(),
            port: port.unwrap_or(config.server.port),
        };
        docfed_api::serve(DocServerState::new(resolver), server_config)
            .await
            .map_err(Error::io)
    }

    /// Print every routable documentation path, one per line.
    async fn print_paths(&self) -> Result<()> {
        let config = self.config();
        let registry = config.registry();
        let paths = enumerate_static_paths(&config.content_dir()?, &registry).await?;
        for segments in paths {
            println!("/{}", segments.join("/"));
        }
        Ok(())
    }

    /// Toggle one sync target for the configured connection.
    async fn sync(&self, target: SyncTarget, enabled: bool) -> Result<()> {
        let sync = &self.config().sync;
        let endpoint = sync
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::config("sync.endpoint is not set"))?;
        let connection_id = sync
            .connection_id
            .as_deref()
            .ok_or_else(|| Error::config("sync.connection_id is not set"))?;
        let organization_integration_id = sync
            .organization_integration_id
            .as_deref()
            .ok_or_else(|| Error::config("sync.organization_integration_id is not set"))?;

        let mut api = HttpIntegrationApi::new(endpoint);
        if let Some(token) = &sync.token {
            api = api.with_token(token);
        }

        let mut form = EnvSyncForm::new(
            connection_id,
            organization_integration_id,
            sync.targets.iter().copied(),
        );
        form.toggle(&api, target, enabled).await?;

        let state = if enabled { "enabled" } else { "disabled" };
        println!("{state} {target} sync for connection {connection_id}");
        Ok(())
    }

    /// Rewrite a single link against the configured federation source.
    fn rewrite(&self, href: &str) -> Result<()> {
        let config = self.config();
        let rewriter = LinkRewriter::from_config(&config.federation, config.registry())?;
        println!("{}", rewriter.rewrite(href));
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
