//! Individual command argument structures.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::OutputFormat;

/// Options shared by the report commands.
#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Read the report from a JSON file instead of fetching it
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Write json/html output to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Seed for chart colors (same seed, same colors)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Clone, Debug)]
pub struct WebsiteArgs {
    /// Website id on the crawl server
    pub id: u64,

    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser, Clone, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Parser, Clone, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigAction {
    /// Initialize configuration file
    Init,
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}
