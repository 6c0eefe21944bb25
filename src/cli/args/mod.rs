//! CLI argument definitions and subcommands.
//!
//! - [`enums`]: ValueEnum types (OutputFormat)
//! - [`global`]: Global CLI structure and STYLES constant
//! - [`commands`]: Individual command argument structs

mod commands;
mod enums;
mod global;

pub use commands::{ConfigAction, ConfigArgs, ReportArgs, StatsArgs, WebsiteArgs};
pub use enums::OutputFormat;
pub use global::{parse_cli, Cli, Commands, STYLES};
