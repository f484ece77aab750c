//! # Command Line Interface
//!
//! `kong-access` exposes every client operation as a subcommand. Connection settings
//! are resolved per field from the command line, ~/.kong-access/config.toml, the
//! `KONG_ADMIN_*` environment variables and finally the built-in defaults.

pub mod config;
pub mod config_cmd;
pub mod output;
pub mod plugins;
pub mod routes;
pub mod services;
pub mod targets;
pub mod upstreams;

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::ClientConfig;
use crate::observability::{init_logging_with_format, LogFormat};
use crate::KongClient;

#[derive(Parser)]
#[command(name = "kong-access")]
#[command(about = "Inspect and configure a Kong gateway through its admin API")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (request and response bodies at trace level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Admin API host
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Admin API port
    #[arg(long, global = true)]
    pub port: Option<u32>,

    /// Connect to the admin API over https
    #[arg(long, global = true, conflicts_with = "no_tls")]
    pub tls: bool,

    /// Connect over plain http, overriding `use_tls` from the config file
    #[arg(long, global = true)]
    pub no_tls: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Connection settings given on the command line
    pub fn connection_flags(&self) -> config::ConnectionFlags {
        let use_tls = match (self.tls, self.no_tls) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        config::ConnectionFlags { host: self.host.clone(), port: self.port, use_tls }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upstream management commands
    Upstream {
        #[command(subcommand)]
        command: upstreams::UpstreamCommands,
    },

    /// Upstream target management commands
    Target {
        #[command(subcommand)]
        command: targets::TargetCommands,
    },

    /// Service management commands
    Service {
        #[command(subcommand)]
        command: services::ServiceCommands,
    },

    /// Route management commands
    Route {
        #[command(subcommand)]
        command: routes::RouteCommands,
    },

    /// Plugin management commands
    Plugin {
        #[command(subcommand)]
        command: plugins::PluginCommands,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: config_cmd::ConfigCommands,
    },
}

/// Run CLI commands
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.log_json { LogFormat::Json } else { LogFormat::Text };
    init_logging_with_format(cli.verbose, format)?;

    let flags = cli.connection_flags();
    let (timeout, verbose) = (cli.timeout, cli.verbose);

    match cli.command {
        Commands::Config { command } => config_cmd::handle_config_command(command).await?,
        Commands::Upstream { command } => {
            let client = create_client(flags, timeout, verbose)?;
            upstreams::handle_upstream_command(command, &client).await?
        }
        Commands::Target { command } => {
            let client = create_client(flags, timeout, verbose)?;
            targets::handle_target_command(command, &client).await?
        }
        Commands::Service { command } => {
            let client = create_client(flags, timeout, verbose)?;
            services::handle_service_command(command, &client).await?
        }
        Commands::Route { command } => {
            let client = create_client(flags, timeout, verbose)?;
            routes::handle_route_command(command, &client).await?
        }
        Commands::Plugin { command } => {
            let client = create_client(flags, timeout, verbose)?;
            plugins::handle_plugin_command(command, &client).await?
        }
    }

    Ok(())
}

/// Create a connected client from the resolved settings
fn create_client(
    flags: config::ConnectionFlags,
    timeout: Option<u64>,
    verbose: bool,
) -> anyhow::Result<KongClient> {
    let file = config::CliConfig::load()?;

    let settings = config::resolve_connection(flags, &file)?;
    let timeout = config::resolve_timeout(timeout, &file).map(Duration::from_secs);

    let client = KongClient::from_settings(&settings, ClientConfig { timeout, verbose })
        .with_context(|| format!("Invalid admin API address {}:{}", settings.host, settings.port))?;
    let base_url = client.base_url()?;
    debug!(base_url, "Connected client ready");

    Ok(client)
}
