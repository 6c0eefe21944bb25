//! ValueEnum types for CLI arguments.

use clap::ValueEnum;

/// Output format for report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output
    #[default]
    Text,
    /// Prepared charts and fields as JSON
    Json,
    /// Self-contained HTML page with SVG charts
    Html,
}
