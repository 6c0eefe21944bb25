//! crawl-report: render open-directory crawl reports.

pub mod api;
pub mod chart;
pub mod config;
pub mod context;
pub mod error;
pub mod render;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use chart::{Chart, ChartKind, RelevanceRule, Series};
pub use render::{ChartSink, ReportRenderer, TableSink, View};
pub use report::Report;
