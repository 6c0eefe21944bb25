//! Access to crawl server reports.

pub mod client;

pub use client::{load_file, ReportClient};
