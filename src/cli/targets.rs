//! Upstream target CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::{self, OutputFormat, Table};
use crate::domain::TargetList;
use crate::KongClient;

#[derive(Subcommand)]
pub enum TargetCommands {
    /// List the targets of an upstream
    #[command(
        after_help = "EXAMPLES:\n    kong-access target list billing\n    kong-access target list billing --output json"
    )]
    List {
        /// Upstream name
        #[arg(value_name = "UPSTREAM")]
        upstream: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Check whether an address is a target of an upstream
    #[command(
        long_about = "Check whether an address is registered as a target of an upstream.\n\nWith --ipv4 the address must contain a dotted IPv4 address. Exits with status 1 when the target is absent.",
        after_help = "EXAMPLES:\n    kong-access target has billing 10.0.0.5:8000\n    kong-access target has billing 10.0.0.5:8000 --ipv4"
    )]
    Has {
        /// Upstream name
        #[arg(value_name = "UPSTREAM")]
        upstream: String,

        /// Target address (host:port)
        #[arg(value_name = "ADDRESS")]
        address: String,

        /// Require the address to contain an IPv4 address
        #[arg(long)]
        ipv4: bool,
    },

    /// Add a target to an upstream
    #[command(after_help = "EXAMPLES:\n    kong-access target add billing 10.0.0.5:8000")]
    Add {
        /// Upstream name
        #[arg(value_name = "UPSTREAM")]
        upstream: String,

        /// Target address (host:port)
        #[arg(value_name = "ADDRESS")]
        address: String,
    },

    /// Remove a target from an upstream
    #[command(after_help = "EXAMPLES:\n    kong-access target delete billing 10.0.0.5:8000")]
    Delete {
        /// Upstream name
        #[arg(value_name = "UPSTREAM")]
        upstream: String,

        /// Target address (host:port)
        #[arg(value_name = "ADDRESS")]
        address: String,
    },
}

/// Handle target commands
pub async fn handle_target_command(command: TargetCommands, client: &KongClient) -> Result<()> {
    match command {
        TargetCommands::List { upstream, output } => {
            let targets = client
                .read_upstream_targets(&upstream)
                .await
                .with_context(|| format!("Failed to list targets of upstream '{}'", upstream))?;
            match output {
                OutputFormat::Table => print_targets_table(&targets),
                format => output::print_output(&targets, format)?,
            }
        }
        TargetCommands::Has { upstream, address, ipv4 } => {
            let found = if ipv4 {
                client.is_ipv4_address_in_upstream_target_list(&address, &upstream).await?
            } else {
                client.is_address_in_upstream_target_list(&address, &upstream).await?
            };
            output::print_check(
                found,
                &format!("'{}' is a target of upstream '{}'", address, upstream),
                &format!("'{}' is not a target of upstream '{}'", address, upstream),
            );
        }
        TargetCommands::Add { upstream, address } => {
            client
                .create_upstream_target(&upstream, &address)
                .await
                .with_context(|| format!("Failed to add target '{}'", address))?;
            println!("✅ Target '{}' added to upstream '{}'", address, upstream);
        }
        TargetCommands::Delete { upstream, address } => {
            client
                .delete_upstream_target(&upstream, &address)
                .await
                .with_context(|| format!("Failed to delete target '{}'", address))?;
            println!("✅ Target '{}' removed from upstream '{}'", address, upstream);
        }
    }

    Ok(())
}

fn print_targets_table(targets: &TargetList) {
    if targets.data.is_empty() {
        println!("No targets found");
        return;
    }

    let mut table = Table::new(&[("Target", 30), ("Weight", 8), ("ID", 36)]);
    for target in &targets.data {
        table.row(vec![target.address.clone(), target.weight.to_string(), target.id.clone()]);
    }
    table.print(targets.has_more());
}
