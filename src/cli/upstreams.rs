//! Upstream CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::{self, OutputFormat};
use crate::KongClient;

#[derive(Subcommand)]
pub enum UpstreamCommands {
    /// Check whether an upstream exists
    #[command(
        long_about = "Check whether an upstream is configured on the gateway.\n\nExits with status 1 when it is not.",
        after_help = "EXAMPLES:\n    kong-access upstream exists billing"
    )]
    Exists {
        /// Upstream name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show an upstream's configuration
    #[command(
        after_help = "EXAMPLES:\n    kong-access upstream get billing\n    kong-access upstream get billing --output yaml"
    )]
    Get {
        /// Upstream name
        #[arg(value_name = "NAME")]
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Create an upstream with default active health checks
    #[command(
        long_about = "Create an upstream (a load-balanced pool of targets).\n\nThe upstream is created with active health checks probing /ping every second and expecting 204.",
        after_help = "EXAMPLES:\n    kong-access upstream create billing"
    )]
    Create {
        /// Upstream name
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Handle upstream commands
pub async fn handle_upstream_command(command: UpstreamCommands, client: &KongClient) -> Result<()> {
    match command {
        UpstreamCommands::Exists { name } => {
            let exists = client.is_upstream_set_up(&name).await?;
            output::print_check(
                exists,
                &format!("Upstream '{}' is configured", name),
                &format!("Upstream '{}' is not configured", name),
            );
        }
        UpstreamCommands::Get { name, output } => {
            let upstream = client
                .read_upstream_configuration(&name)
                .await
                .with_context(|| format!("Failed to read upstream '{}'", name))?;
            output::print_output(&upstream, output)?;
        }
        UpstreamCommands::Create { name } => {
            client
                .create_upstream(&name)
                .await
                .with_context(|| format!("Failed to create upstream '{}'", name))?;
            println!("✅ Upstream '{}' created", name);
        }
    }

    Ok(())
}
