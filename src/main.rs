// Binary-specific modules
mod cli;

use cli::commands::Outcome;
use cli::{parse_cli, Commands};
use crawl_report::context::AppContext;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load context
    let ctx = AppContext::new()?.with_overrides(cli.server.clone(), cli.no_color)?;

    if !ctx.config.display.color {
        colored::control::set_override(false);
    }

    // Dispatch to command
    let outcome = match cli.command {
        Commands::Website(args) => cli::commands::run_website(args, ctx).await?,
        Commands::Stats(args) => cli::commands::run_stats(args, ctx).await?,
        Commands::Config(args) => {
            cli::commands::run_config(args, ctx)?;
            Outcome::Rendered
        }
    };

    if outcome == Outcome::Unavailable {
        std::process::exit(1);
    }

    Ok(())
}
