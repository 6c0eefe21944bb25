//! Config management commands.
//!
//! ```bash
//! # Write a default config file
//! crawl-report config init
//!
//! # Print the effective configuration (file + env + flags)
//! crawl-report config show
//! ```

use crate::cli::{ConfigAction, ConfigArgs};
use crawl_report::config::ConfigLoader;
use crawl_report::context::AppContext;
use crawl_report::error::Result;
use crawl_report::utils::{hint, success};

/// Run the config command.
pub fn run_config(args: ConfigArgs, ctx: AppContext) -> Result<()> {
    match args.action {
        ConfigAction::Init => {
            let path = ConfigLoader::init()?;
            success(&format!("Created config file at {}", path.display()));
        }
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(&ctx.config)?);
        }
        ConfigAction::Path => match ConfigLoader::config_path() {
            Some(path) => {
                println!("{}", path.display());
                if !path.exists() {
                    hint("File does not exist yet; run `crawl-report config init`");
                }
            }
            None => hint("No config directory available on this platform"),
        },
    }
    Ok(())
}
