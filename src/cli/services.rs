//! Service CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::{self, OutputFormat};
use crate::KongClient;

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Check whether a service exists
    #[command(after_help = "EXAMPLES:\n    kong-access service exists billing")]
    Exists {
        /// Service name
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show a service's configuration
    #[command(
        after_help = "EXAMPLES:\n    kong-access service get billing\n    kong-access service get billing --output yaml"
    )]
    Get {
        /// Service name
        #[arg(value_name = "NAME")]
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Create a service proxying to a host or upstream
    #[command(
        long_about = "Create a service.\n\nThe host may be a plain hostname or the name of an upstream, in which case the gateway balances requests across the upstream's targets.",
        after_help = "EXAMPLES:\n    kong-access service create billing --host billing-upstream"
    )]
    Create {
        /// Service name
        #[arg(value_name = "NAME")]
        name: String,

        /// Host or upstream the service proxies to
        #[arg(long, value_name = "HOST")]
        host: String,
    },

    /// Point a service at a different host and verify the change
    #[command(after_help = "EXAMPLES:\n    kong-access service set-host billing billing-upstream-v2")]
    SetHost {
        /// Service name
        #[arg(value_name = "NAME")]
        name: String,

        /// New host or upstream
        #[arg(value_name = "HOST")]
        host: String,
    },

    /// Check whether a service proxies to the given upstream
    #[command(after_help = "EXAMPLES:\n    kong-access service has-upstream billing billing-upstream")]
    HasUpstream {
        /// Service name
        #[arg(value_name = "NAME")]
        name: String,

        /// Upstream name
        #[arg(value_name = "UPSTREAM")]
        upstream: String,
    },
}

/// Handle service commands
pub async fn handle_service_command(command: ServiceCommands, client: &KongClient) -> Result<()> {
    match command {
        ServiceCommands::Exists { name } => {
            let exists = client.is_service_set_up(&name).await?;
            output::print_check(
                exists,
                &format!("Service '{}' is configured", name),
                &format!("Service '{}' is not configured", name),
            );
        }
        ServiceCommands::Get { name, output } => {
            let service = client
                .read_service_configuration(&name)
                .await
                .with_context(|| format!("Failed to read service '{}'", name))?;
            output::print_output(&service, output)?;
        }
        ServiceCommands::Create { name, host } => {
            client
                .create_service(&name, &host)
                .await
                .with_context(|| format!("Failed to create service '{}'", name))?;
            println!("✅ Service '{}' created with host '{}'", name, host);
        }
        ServiceCommands::SetHost { name, host } => {
            client
                .update_service_host(&name, &host)
                .await
                .with_context(|| format!("Failed to update host of service '{}'", name))?;
            println!("✅ Service '{}' now proxies to '{}'", name, host);
        }
        ServiceCommands::HasUpstream { name, upstream } => {
            let linked = client.service_has_upstream(&name, &upstream).await?;
            output::print_check(
                linked,
                &format!("Service '{}' proxies to '{}'", name, upstream),
                &format!("Service '{}' does not proxy to '{}'", name, upstream),
            );
        }
    }

    Ok(())
}
