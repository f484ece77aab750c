//! Rendering of command results
//!
//! Single resources print as JSON or YAML. List commands additionally support a
//! fixed-width text table.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Print a serializable value as JSON or YAML
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<()> {
    println!("{}", render(data, format)?);
    Ok(())
}

fn render<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).context("Failed to serialize to JSON"),
        OutputFormat::Yaml => serde_yaml::to_string(data).context("Failed to serialize to YAML"),
        OutputFormat::Table => anyhow::bail!("Table output is only available for list commands"),
    }
}

/// Print the answer of a yes/no check and exit non-zero on "no"
pub fn print_check(outcome: bool, yes: &str, no: &str) {
    if outcome {
        println!("✅ {}", yes);
    } else {
        println!("❌ {}", no);
        std::process::exit(1);
    }
}

/// Fixed-width text table
///
/// Cells wider than their column are cut and end in `...`.
pub struct Table {
    columns: Vec<(&'static str, usize)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[(&'static str, usize)]) -> Self {
        Self { columns: columns.to_vec(), rows: Vec::new() }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let padded: Vec<String> = self
            .columns
            .iter()
            .zip(cells)
            .map(|(&(_, width), cell)| format!("{:<width$}", fit(cell, width), width = width))
            .collect();
        padded.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let width: usize = self.columns.iter().map(|(_, w)| w + 1).sum::<usize>().saturating_sub(1);

        let mut lines = vec![self.line(self.columns.iter().map(|(name, _)| *name)), "-".repeat(width)];
        lines.extend(self.rows.iter().map(|row| self.line(row.iter().map(String::as_str))));
        lines.join("\n")
    }

    /// Print the table, noting when the gateway holds more entries than shown
    pub fn print(&self, has_more: bool) {
        println!("\n{}", self.render());
        if has_more {
            println!("\n(more entries exist on the gateway; only the first page is shown)");
        }
        println!();
    }
}

fn fit(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        cell.to_string()
    } else {
        let kept: String = cell.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
