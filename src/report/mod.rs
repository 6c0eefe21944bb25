//! Crawl report model.

pub mod types;

pub use types::*;
