//! Website and stats report commands.

use crate::cli::{OutputFormat, ReportArgs, StatsArgs, WebsiteArgs};
use crawl_report::api::{load_file, ReportClient};
use crawl_report::chart::ColorPicker;
use crawl_report::context::AppContext;
use crawl_report::error::{ReportError, Result};
use crawl_report::render::{HtmlView, JsonView, ReportRenderer, TableSink, TerminalView, View};
use crawl_report::report::Report;
use crawl_report::utils::success;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// How a report command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    /// The report could not be obtained; the unavailable state was shown.
    Unavailable,
}

enum Source {
    Website(u64),
    Global,
}

/// Run the website command.
pub async fn run_website(args: WebsiteArgs, ctx: AppContext) -> Result<Outcome> {
    run_report(View::Website, Source::Website(args.id), args.report, ctx).await
}

/// Run the stats command.
pub async fn run_stats(args: StatsArgs, ctx: AppContext) -> Result<Outcome> {
    run_report(View::Global, Source::Global, args.report, ctx).await
}

async fn run_report(view: View, source: Source, args: ReportArgs, ctx: AppContext) -> Result<Outcome> {
    if args.out.is_some() && args.output == OutputFormat::Text {
        return Err(ReportError::InvalidInput(
            "--out requires --output json or --output html".into(),
        ));
    }

    let report = match obtain(&source, &args, &ctx).await {
        Ok(report) => Ok(report),
        Err(e) if e.is_unavailable() => {
            tracing::warn!("Report unavailable: {}", e);
            Err(e.to_string())
        }
        Err(e) => return Err(e),
    };

    let mut renderer = ReportRenderer::new(ctx.config.chart, ColorPicker::new(args.seed));

    match args.output {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut view_out = TerminalView::new(stdout.lock(), ctx.config.display.bar_width);
            render_or_unavailable(&mut renderer, view, &report, &mut view_out)?;
            view_out.into_inner().flush()?;
        }
        OutputFormat::Json => {
            let mut json = JsonView::new();
            render_or_unavailable(&mut renderer, view, &report, &mut json)?;
            let mut out = open_output(args.out.as_deref())?;
            json.finish(&mut out)?;
            out.flush()?;
        }
        OutputFormat::Html => {
            let mut html = HtmlView::new();
            render_or_unavailable(&mut renderer, view, &report, &mut html)?;
            let mut out = open_output(args.out.as_deref())?;
            html.finish(&mut out, &document_title(view, report.as_ref().ok()))?;
            out.flush()?;
        }
    }

    if let Some(path) = &args.out {
        success(&format!("Report written to {}", path.display()));
    }

    Ok(match report {
        Ok(_) => Outcome::Rendered,
        Err(_) => Outcome::Unavailable,
    })
}

async fn obtain(source: &Source, args: &ReportArgs, ctx: &AppContext) -> Result<Report> {
    if let Some(path) = &args.file {
        return load_file(path);
    }

    let client = ReportClient::new(&ctx.config.server)?;
    let spinner = (args.output == OutputFormat::Text).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Fetching report...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = match source {
        Source::Website(id) => client.fetch_website(*id).await,
        Source::Global => client.fetch_global().await,
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result
}

fn render_or_unavailable<S>(
    renderer: &mut ReportRenderer,
    view: View,
    report: &std::result::Result<Report, String>,
    sink: &mut S,
) -> Result<()>
where
    S: crawl_report::render::ChartSink + TableSink,
{
    match report {
        Ok(report) => renderer.render_into(view, report, sink),
        Err(reason) => sink.unavailable(reason),
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

fn document_title(view: View, report: Option<&Report>) -> String {
    match (view, report) {
        (View::Website, Some(report)) if !report.base_url.is_empty() => {
            format!("Crawl report: {}", report.base_url)
        }
        (View::Website, _) => "Crawl report".to_string(),
        (View::Global, _) => "Crawl statistics".to_string(),
    }
}
