//! Route CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::{self, OutputFormat, Table};
use crate::domain::RouteConfigurationList;
use crate::KongClient;

#[derive(Subcommand)]
pub enum RouteCommands {
    /// List the routes of a service
    #[command(
        after_help = "EXAMPLES:\n    kong-access route list billing\n    kong-access route list billing --output yaml"
    )]
    List {
        /// Service name
        #[arg(value_name = "SERVICE")]
        service: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Check whether a service has routes, or a route with the given path
    #[command(
        after_help = "EXAMPLES:\n    # Any route at all\n    kong-access route has billing\n\n    # A route matching exactly /billing\n    kong-access route has billing --path /billing"
    )]
    Has {
        /// Service name
        #[arg(value_name = "SERVICE")]
        service: String,

        /// Exact path to look for (including the leading slash)
        #[arg(long, value_name = "PATH")]
        path: Option<String>,
    },

    /// Create an HTTP route on a service and verify it
    #[command(
        long_about = "Create an HTTP route for a path on a service.\n\nRequest and response buffering are disabled. The route list is read back afterwards and the command fails if the path is not listed.",
        after_help = "EXAMPLES:\n    kong-access route create billing /billing"
    )]
    Create {
        /// Service name
        #[arg(value_name = "SERVICE")]
        service: String,

        /// Path to route (including the leading slash)
        #[arg(value_name = "PATH")]
        path: String,
    },
}

/// Handle route commands
pub async fn handle_route_command(command: RouteCommands, client: &KongClient) -> Result<()> {
    match command {
        RouteCommands::List { service, output } => {
            let routes = client
                .read_route_configuration_list(&service)
                .await
                .with_context(|| format!("Failed to list routes of service '{}'", service))?;
            match output {
                OutputFormat::Table => print_routes_table(&routes),
                format => output::print_output(&routes, format)?,
            }
        }
        RouteCommands::Has { service, path: Some(path) } => {
            let found = client.service_has_route_with_path_set_up(&service, &path).await?;
            output::print_check(
                found,
                &format!("Service '{}' has a route for '{}'", service, path),
                &format!("Service '{}' has no route for '{}'", service, path),
            );
        }
        RouteCommands::Has { service, path: None } => {
            let found = client.service_has_route_set_up(&service).await?;
            output::print_check(
                found,
                &format!("Service '{}' has routes", service),
                &format!("Service '{}' has no routes", service),
            );
        }
        RouteCommands::Create { service, path } => {
            client
                .create_route(&service, &path)
                .await
                .with_context(|| format!("Failed to create route '{}' on service '{}'", path, service))?;
            println!("✅ Route '{}' created on service '{}'", path, service);
        }
    }

    Ok(())
}

fn print_routes_table(routes: &RouteConfigurationList) {
    if routes.data.is_empty() {
        println!("No routes found");
        return;
    }

    let mut table = Table::new(&[("Name", 25), ("Paths", 35), ("Protocols", 15), ("ID", 36)]);
    for route in &routes.data {
        table.row(vec![
            route.name.clone().unwrap_or_else(|| "-".to_string()),
            route.paths.join(","),
            route.protocols.join(","),
            route.id.clone(),
        ]);
    }
    table.print(routes.has_more());
}
