pub mod config;
pub mod report;

pub use config::run_config;
pub use report::{run_stats, run_website, Outcome};
