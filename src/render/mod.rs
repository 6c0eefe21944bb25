//! Report rendering.
//!
//! [`ReportRenderer`] turns a [`Report`] into prepared charts and formatted
//! table fields, and hands them to two collaborators:
//!
//! - [`ChartSink`] receives each [`Chart`] (pie, doughnut or bar)
//! - [`TableSink`] receives scalar strings keyed by field name
//!
//! Three views implement both traits: [`TerminalView`], [`HtmlView`] and
//! [`JsonView`].

pub mod html;
pub mod json;
pub mod terminal;

pub use html::HtmlView;
pub use json::JsonView;
pub use terminal::TerminalView;

use crate::chart::series::{category_chart, dates_chart, sizes_chart};
use crate::chart::{Chart, ChartKind, ColorPicker, RelevanceRule};
use crate::error::Result;
use crate::report::Report;
use crate::utils::{format_bytes, format_count, format_millis, human_bytes};

/// Receives prepared charts.
pub trait ChartSink {
    fn draw(&mut self, chart: &Chart) -> Result<()>;
}

/// Receives formatted table fields.
pub trait TableSink {
    fn write_field(&mut self, key: &str, value: &str) -> Result<()>;

    /// Switch to the single "report unavailable" state.
    fn unavailable(&mut self, reason: &str) -> Result<()>;
}

/// Which report page is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// One crawled website: extension pie chart and website table
    Website,
    /// Whole database: mime doughnut chart and search-index table
    Global,
}

/// Human caption for a table field key.
pub fn caption(key: &str) -> &str {
    match key {
        "baseUrl" => "Base URL",
        "fileCount" => "File count",
        "totalSize" => "Total size",
        "reportTime" => "Report time",
        "esIndexSize" => "Index size",
        "esSearchCount" => "Search count",
        "esSearchTime" => "Total search time",
        "esSearchTimeAvg" => "Average search time",
        "totalCount" => "File count",
        "totalCountNonzero" => "Files with known size",
        "sizeAvg" => "Average size",
        "sizeStdDeviation" => "Size standard deviation",
        "sizeStdDeviationBounds" => "Size standard deviation bounds",
        "sizeVariance" => "Size variance",
        other => other,
    }
}

/// Prepares one rendering pass per report.
pub struct ReportRenderer {
    rule: RelevanceRule,
    colors: ColorPicker,
}

impl ReportRenderer {
    pub fn new(rule: RelevanceRule, colors: ColorPicker) -> Self {
        Self { rule, colors }
    }

    /// Render `report` into the given collaborators: charts first, then the
    /// table.
    pub fn render<C, T>(&mut self, view: View, report: &Report, charts: &mut C, table: &mut T) -> Result<()>
    where
        C: ChartSink + ?Sized,
        T: TableSink + ?Sized,
    {
        self.draw_charts(view, report, charts)?;
        Self::write_table(view, report, table)
    }

    /// [`render`](Self::render) for a view that is both collaborators.
    pub fn render_into<S>(&mut self, view: View, report: &Report, sink: &mut S) -> Result<()>
    where
        S: ChartSink + TableSink + ?Sized,
    {
        self.draw_charts(view, report, sink)?;
        Self::write_table(view, report, sink)
    }

    fn draw_charts<C: ChartSink + ?Sized>(&mut self, view: View, report: &Report, sink: &mut C) -> Result<()> {
        let prepared = self.charts(view, report);
        tracing::debug!("Rendering {} charts", prepared.len());
        for chart in &prepared {
            sink.draw(chart)?;
        }
        Ok(())
    }

    fn write_table<T: TableSink + ?Sized>(view: View, report: &Report, sink: &mut T) -> Result<()> {
        for (key, value) in Self::fields(view, report) {
            sink.write_field(key, &value)?;
        }
        Ok(())
    }

    /// Prepared charts for `view`, in display order.
    pub fn charts(&mut self, view: View, report: &Report) -> Vec<Chart> {
        let totals = report.totals();
        let mut charts = Vec::with_capacity(3);

        let (stats, kind, title) = match view {
            View::Website => (
                &report.ext_stats,
                ChartKind::Pie,
                format!(
                    "File types for {} - {}",
                    report.base_url,
                    human_bytes(report.total_size)
                ),
            ),
            View::Global => (
                &report.mime_stats,
                ChartKind::Doughnut,
                format!("Mime types - {}", human_bytes(report.total_size)),
            ),
        };
        if !stats.is_empty() {
            charts.push(category_chart(
                "types",
                kind,
                title,
                stats,
                totals,
                &self.rule,
                &mut self.colors,
            ));
        }

        if !report.sizes_histogram.is_empty() {
            charts.push(sizes_chart(&report.sizes_histogram, &mut self.colors));
        }
        if !report.dates_histogram.is_empty() {
            charts.push(dates_chart(&report.dates_histogram, &mut self.colors));
        }

        charts
    }

    /// Formatted table fields for `view`. Absent metrics are skipped.
    pub fn fields(view: View, report: &Report) -> Vec<(&'static str, String)> {
        match view {
            View::Website => vec![
                ("baseUrl", report.base_url.clone()),
                ("fileCount", format_count(report.total_count)),
                ("totalSize", human_bytes(report.total_size)),
                ("reportTime", format!("{} UTC", report.report_time)),
            ],
            View::Global => {
                let mut fields = Vec::with_capacity(11);
                if let Some(size) = report.index_size {
                    fields.push(("esIndexSize", format_bytes(size)));
                }
                if let Some(count) = report.search_count {
                    fields.push(("esSearchCount", format_count(count)));
                }
                if let Some(ms) = report.search_time_ms {
                    fields.push(("esSearchTime", format_millis(ms, 0)));
                }
                if let Some(ms) = report.search_time_avg_ms {
                    fields.push(("esSearchTimeAvg", format_millis(ms, 2)));
                }
                fields.push(("totalCount", format_count(report.total_count)));
                if let Some(count) = report.total_count_nonzero {
                    fields.push(("totalCountNonzero", format_count(count)));
                }
                fields.push(("totalSize", human_bytes(report.total_size)));
                if let Some(avg) = report.size_avg {
                    fields.push(("sizeAvg", format_bytes(avg)));
                }
                if let Some(dev) = report.std_deviation {
                    fields.push(("sizeStdDeviation", format_bytes(dev)));
                }
                if let Some(bounds) = report.std_deviation_bounds {
                    fields.push((
                        "sizeStdDeviationBounds",
                        format!(
                            "[{}, {}]",
                            format_bytes(bounds.lower),
                            format_bytes(bounds.upper)
                        ),
                    ));
                }
                if let Some(variance) = report.variance {
                    fields.push(("sizeVariance", format_bytes(variance)));
                }
                fields
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Bounds, CategoryStat, DateBucket, SizeBucket};

    #[derive(Default)]
    struct Recorder {
        charts: Vec<Chart>,
        fields: Vec<(String, String)>,
        unavailable: Option<String>,
    }

    impl ChartSink for Recorder {
        fn draw(&mut self, chart: &Chart) -> Result<()> {
            self.charts.push(chart.clone());
            Ok(())
        }
    }

    impl TableSink for Recorder {
        fn write_field(&mut self, key: &str, value: &str) -> Result<()> {
            self.fields.push((key.to_string(), value.to_string()));
            Ok(())
        }

        fn unavailable(&mut self, reason: &str) -> Result<()> {
            self.unavailable = Some(reason.to_string());
            Ok(())
        }
    }

    fn website_report() -> Report {
        let mut report = Report {
            total_count: 65,
            total_size: 5_203_000,
            base_url: "http://files.example.com/".into(),
            report_time: "2018-06-14 21:03:11".into(),
            ..Report::default()
        };
        report.ext_stats = vec![
            CategoryStat::new(4_000_000, 10, "zip"),
            CategoryStat::new(1_000, 5, "txt"),
            CategoryStat::new(1_200_000, 50, "mp3"),
            CategoryStat::new(2_000, 0, "nfo"),
        ]
        .into_iter()
        .collect();
        report.sizes_histogram = vec![SizeBucket { lower_bound: 0, count: 65 }];
        report
    }

    #[test]
    fn test_render_website() {
        let report = website_report();
        let mut renderer = ReportRenderer::new(RelevanceRule::default(), ColorPicker::seeded(1));
        let mut charts = Recorder::default();
        let mut table = Recorder::default();

        renderer
            .render(View::Website, &report, &mut charts, &mut table)
            .unwrap();

        assert_eq!(charts.charts.len(), 2);
        let types = &charts.charts[0];
        assert_eq!(types.kind, ChartKind::Pie);
        assert_eq!(types.title, "File types for http://files.example.com/ - 5.2 MB");
        let labels: Vec<&str> = types.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["zip x10 (4.0 MB)", "mp3 x50 (1.2 MB)", "other x5 (3.0 kB)"]
        );
        assert_eq!(charts.charts[1].id, "sizes");

        assert_eq!(
            table.fields,
            vec![
                ("baseUrl".to_string(), "http://files.example.com/".to_string()),
                ("fileCount".to_string(), "65".to_string()),
                ("totalSize".to_string(), "5.2 MB".to_string()),
                ("reportTime".to_string(), "2018-06-14 21:03:11 UTC".to_string()),
            ]
        );
        assert!(table.unavailable.is_none());
    }

    #[test]
    fn test_render_into_single_sink() {
        let report = website_report();
        let mut renderer = ReportRenderer::new(RelevanceRule::default(), ColorPicker::seeded(1));
        let mut sink = Recorder::default();

        renderer.render_into(View::Website, &report, &mut sink).unwrap();

        assert_eq!(sink.charts.len(), 2);
        assert_eq!(sink.fields.len(), 4);
    }

    #[test]
    fn test_sizes_summing_past_u64_render() {
        colored::control::set_override(false);
        let report = Report::from_json(
            r#"{"total_size": 1000000, "ext_stats": {
                "iso": [18000000000000000000, 1, "iso"],
                "mkv": [18000000000000000000, 1, "mkv"]}}"#,
        )
        .unwrap();
        let mut renderer = ReportRenderer::new(RelevanceRule::default(), ColorPicker::seeded(1));

        let mut terminal = TerminalView::new(Vec::new(), 10);
        renderer.render_into(View::Website, &report, &mut terminal).unwrap();
        let text = String::from_utf8(terminal.into_inner()).unwrap();
        assert_eq!(text.matches(" 50.0%").count(), 2);

        let mut html = HtmlView::new();
        renderer.render_into(View::Website, &report, &mut html).unwrap();
        let mut page = Vec::new();
        html.finish(&mut page, "Crawl report").unwrap();
        let page = String::from_utf8(page).unwrap();
        assert_eq!(page.matches("<path d=").count(), 2);
        assert!(page.contains("iso x1 (18.0 EB)"));
    }

    #[test]
    fn test_render_global_fields() {
        let report = Report {
            total_count: 1_234_567,
            total_size: 0,
            index_size: Some(2_048_000.0),
            search_count: Some(42),
            search_time_ms: Some(380.0),
            search_time_avg_ms: Some(9.047619),
            total_count_nonzero: Some(1_000_000),
            size_avg: Some(1_500_000.0),
            std_deviation: Some(900.0),
            variance: Some(810_000.0),
            std_deviation_bounds: Some(Bounds {
                lower: 600_000.0,
                upper: 2_400_000.0,
            }),
            ..Report::default()
        };

        let fields = ReportRenderer::fields(View::Global, &report);
        let get = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("esIndexSize"), Some("2.0 MB"));
        assert_eq!(get("esSearchCount"), Some("42"));
        assert_eq!(get("esSearchTime"), Some("380ms"));
        assert_eq!(get("esSearchTimeAvg"), Some("9.05ms"));
        assert_eq!(get("totalCount"), Some("1,234,567"));
        assert_eq!(get("totalCountNonzero"), Some("1,000,000"));
        assert_eq!(get("totalSize"), Some("? B"));
        assert_eq!(get("sizeAvg"), Some("1.5 MB"));
        assert_eq!(get("sizeStdDeviation"), Some("900 B"));
        assert_eq!(get("sizeStdDeviationBounds"), Some("[600.0 kB, 2.4 MB]"));
        assert_eq!(get("sizeVariance"), Some("810.0 kB"));
    }

    #[test]
    fn test_global_skips_missing_metrics() {
        let fields = ReportRenderer::fields(View::Global, &Report::default());
        let keys: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["totalCount", "totalSize"]);
    }

    #[test]
    fn test_global_uses_mime_doughnut() {
        let mut report = Report {
            total_count: 10,
            total_size: 50_000,
            ..Report::default()
        };
        report.mime_stats = vec![CategoryStat::new(50_000, 10, "audio/mpeg")]
            .into_iter()
            .collect();
        report.dates_histogram = vec![DateBucket {
            label: "2018-01".into(),
            count: 10,
        }];

        let mut renderer = ReportRenderer::new(RelevanceRule::default(), ColorPicker::seeded(1));
        let charts = renderer.charts(View::Global, &report);

        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].kind, ChartKind::Doughnut);
        assert_eq!(charts[0].title, "Mime types - 50.0 kB");
        assert_eq!(charts[1].id, "dates");
    }

    #[test]
    fn test_empty_report_has_no_charts() {
        let mut renderer = ReportRenderer::new(RelevanceRule::default(), ColorPicker::seeded(1));
        assert!(renderer.charts(View::Website, &Report::default()).is_empty());
    }

    #[test]
    fn test_caption() {
        assert_eq!(caption("baseUrl"), "Base URL");
        assert_eq!(caption("unknownKey"), "unknownKey");
    }
}
