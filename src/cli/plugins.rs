//! Plugin CLI commands

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::{self, OutputFormat, Table};
use crate::domain::PluginList;
use crate::KongClient;

#[derive(Subcommand)]
pub enum PluginCommands {
    /// List the plugins of a service
    #[command(after_help = "EXAMPLES:\n    kong-access plugin list billing")]
    List {
        /// Service name
        #[arg(value_name = "SERVICE")]
        service: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Check whether a plugin is attached to a service
    #[command(after_help = "EXAMPLES:\n    kong-access plugin has billing rate-limiting")]
    Has {
        /// Service name
        #[arg(value_name = "SERVICE")]
        service: String,

        /// Plugin name
        #[arg(value_name = "PLUGIN")]
        plugin: String,
    },

    /// Attach a plugin to a service and verify it
    #[command(
        long_about = "Attach a plugin to a service.\n\nEach --config KEY=VALUE is sent to the gateway as config.KEY=VALUE. The plugin list is read back afterwards and the command fails if the plugin is not listed.",
        after_help = "EXAMPLES:\n    kong-access plugin add billing rate-limiting --config minute=20 --config policy=local\n    kong-access plugin add billing cors"
    )]
    Add {
        /// Service name
        #[arg(value_name = "SERVICE")]
        service: String,

        /// Plugin name
        #[arg(value_name = "PLUGIN")]
        plugin: String,

        /// Plugin configuration entry (repeatable)
        #[arg(long = "config", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        config: Vec<(String, String)>,
    },
}

/// Handle plugin commands
pub async fn handle_plugin_command(command: PluginCommands, client: &KongClient) -> Result<()> {
    match command {
        PluginCommands::List { service, output } => {
            let plugins = client
                .read_service_plugins(&service)
                .await
                .with_context(|| format!("Failed to list plugins of service '{}'", service))?;
            match output {
                OutputFormat::Table => print_plugins_table(&plugins),
                format => output::print_output(&plugins, format)?,
            }
        }
        PluginCommands::Has { service, plugin } => {
            let found = client.service_has_plugin(&service, &plugin).await?;
            output::print_check(
                found,
                &format!("Plugin '{}' is attached to service '{}'", plugin, service),
                &format!("Plugin '{}' is not attached to service '{}'", plugin, service),
            );
        }
        PluginCommands::Add { service, plugin, config } => {
            let config: BTreeMap<String, String> = config.into_iter().collect();
            client
                .add_service_plugin(&service, &plugin, &config)
                .await
                .with_context(|| format!("Failed to add plugin '{}' to service '{}'", plugin, service))?;
            println!("✅ Plugin '{}' attached to service '{}'", plugin, service);
        }
    }

    Ok(())
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

fn print_plugins_table(plugins: &PluginList) {
    if plugins.data.is_empty() {
        println!("No plugins found");
        return;
    }

    let mut table = Table::new(&[("Name", 25), ("Enabled", 8), ("ID", 36)]);
    for plugin in &plugins.data {
        table.row(vec![plugin.name.clone(), plugin.enabled.to_string(), plugin.id.clone()]);
    }
    table.print(plugins.has_more());
}
