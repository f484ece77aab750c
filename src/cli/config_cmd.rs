//! Configuration management CLI commands
//!
//! Provides commands for managing ~/.kong-access/config.toml

use anyhow::Result;
use clap::Subcommand;

use super::config::CliConfig;
use super::output::{self, OutputFormat, Table};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Initialize configuration file with default values
    Init {
        /// Overwrite existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },

    /// Set a configuration value
    #[command(
        after_help = "EXAMPLES:\n    kong-access config set host kong.internal\n    kong-access config set port 8444\n    kong-access config set use_tls true\n    kong-access config set timeout 10"
    )]
    Set {
        /// Configuration key (host, port, use_tls, or timeout)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Get configuration file path
    Path,
}

/// Handle config commands
pub async fn handle_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Init { force } => init_config(force)?,
        ConfigCommands::Show { output } => show_config(output)?,
        ConfigCommands::Set { key, value } => set_config(&key, &value)?,
        ConfigCommands::Path => println!("{}", CliConfig::config_path()?.display()),
    }

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = CliConfig::config_path()?;

    if path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists at: {}\nUse --force to overwrite",
            path.display()
        );
    }

    CliConfig::default().save()?;

    println!("✅ Configuration file created at: {}", path.display());
    println!("\nYou can now set values using:");
    println!("  kong-access config set host <admin-host>");
    println!("  kong-access config set port <admin-port>");
    println!("  kong-access config set use_tls <true|false>");
    println!("  kong-access config set timeout <seconds>");

    Ok(())
}

fn show_config(format: OutputFormat) -> Result<()> {
    let path = CliConfig::config_path()?;

    if !path.exists() {
        println!("No configuration file found at: {}", path.display());
        println!("\nRun 'kong-access config init' to create one");
        return Ok(());
    }

    let config = CliConfig::load()?;

    match format {
        OutputFormat::Table => print_config_table(&config),
        format => output::print_output(&config, format)?,
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = CliConfig::load()?;
    config.set(key, value)?;
    config.save()?;

    println!("✅ {} set to: {}", key, value);
    println!("Configuration saved to: {}", CliConfig::config_path()?.display());

    Ok(())
}

fn print_config_table(config: &CliConfig) {
    let unset = || "<not set>".to_string();

    let mut table = Table::new(&[("Key", 15), ("Value", 50)]);
    table.row(vec!["host".to_string(), config.host.clone().unwrap_or_else(unset)]);
    table.row(vec!["port".to_string(), config.port.map(|p| p.to_string()).unwrap_or_else(unset)]);
    table.row(vec!["use_tls".to_string(), config.use_tls.map(|t| t.to_string()).unwrap_or_else(unset)]);
    table.row(vec![
        "timeout".to_string(),
        config.timeout.map(|t| format!("{} seconds", t)).unwrap_or_else(unset),
    ]);
    table.print(false);
}
