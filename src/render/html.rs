//! Self-contained HTML report with inline SVG charts.

use super::{caption, ChartSink, TableSink};
use crate::chart::series::share_of;
use crate::chart::{Chart, ChartKind, Series};
use crate::error::Result;
use std::f64::consts::PI;
use std::fmt::Write as _;
use std::io::Write;

const PIE_RADIUS: f64 = 120.0;
const DOUGHNUT_HOLE: f64 = 0.55;
const BAR_HEIGHT: f64 = 18.0;
const BAR_MAX_WIDTH: f64 = 360.0;

/// Collects charts and fields, then writes one HTML document.
#[derive(Debug, Default)]
pub struct HtmlView {
    charts: Vec<String>,
    fields: Vec<(String, String)>,
    unavailable: Option<String>,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the complete document.
    pub fn finish<W: Write>(&self, writer: &mut W, title: &str) -> Result<()> {
        let body = match &self.unavailable {
            Some(reason) => format!(
                r#"<div class="unavailable">Report unavailable: {}</div>"#,
                escape(reason)
            ),
            None => {
                let mut body = String::new();
                for chart in &self.charts {
                    body.push_str(chart);
                }
                if !self.fields.is_empty() {
                    body.push_str(&self.table());
                }
                body
            }
        };

        write!(
            writer,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {{
            --bg: #0d1117;
            --card: #161b22;
            --border: #30363d;
            --text: #e6edf3;
            --dim: #7d8590;
            --error: #f85149;
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--text);
            line-height: 1.5;
        }}
        .container {{ max-width: 1000px; margin: 0 auto; padding: 2rem; }}
        h1 {{ font-size: 1.75rem; margin-bottom: 1.5rem; }}
        .card {{
            background: var(--card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 1.5rem;
            margin-bottom: 1.5rem;
        }}
        .card h2 {{ font-size: 1rem; margin-bottom: 1rem; }}
        .chart {{ display: flex; gap: 2rem; align-items: center; flex-wrap: wrap; }}
        .legend {{ list-style: none; font-size: 0.875rem; }}
        .swatch {{ display: inline-block; width: 0.8rem; height: 0.8rem; border-radius: 2px; margin-right: 0.5rem; }}
        svg text {{ fill: var(--dim); font-size: 11px; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid var(--border); }}
        th {{ color: var(--dim); font-weight: 500; width: 40%; }}
        .unavailable {{ color: var(--error); font-size: 1.25rem; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        {body}
    </div>
</body>
</html>
"#,
            title = escape(title),
            body = body,
        )?;

        Ok(())
    }

    fn table(&self) -> String {
        let mut rows = String::new();
        for (key, value) in &self.fields {
            let _ = write!(
                rows,
                r#"<tr id="{key}"><th>{caption}</th><td>{value}</td></tr>"#,
                key = escape(key),
                caption = escape(caption(key)),
                value = escape(value),
            );
        }
        format!(r#"<div class="card"><table>{}</table></div>"#, rows)
    }
}

impl ChartSink for HtmlView {
    fn draw(&mut self, chart: &Chart) -> Result<()> {
        let svg = match chart.kind {
            ChartKind::Pie => pie_svg(&chart.series, None),
            ChartKind::Doughnut => pie_svg(&chart.series, Some(DOUGHNUT_HOLE)),
            ChartKind::Bar => bar_svg(&chart.series),
        };

        let mut legend = String::new();
        if chart.kind != ChartKind::Bar {
            legend.push_str(r#"<ul class="legend">"#);
            for series in &chart.series {
                let _ = write!(
                    legend,
                    r#"<li><span class="swatch" style="background:{}"></span>{}</li>"#,
                    escape(&series.color),
                    escape(&series.label)
                );
            }
            legend.push_str("</ul>");
        }

        self.charts.push(format!(
            r#"<div class="card" id="{id}Chart"><h2>{title}</h2><div class="chart">{svg}{legend}</div></div>"#,
            id = escape(&chart.id),
            title = escape(&chart.title),
            svg = svg,
            legend = legend,
        ));
        Ok(())
    }
}

impl TableSink for HtmlView {
    fn write_field(&mut self, key: &str, value: &str) -> Result<()> {
        self.fields.push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn unavailable(&mut self, reason: &str) -> Result<()> {
        self.unavailable = Some(reason.to_string());
        Ok(())
    }
}

/// Pie (or doughnut, with `hole` as a fraction of the radius) as SVG.
fn pie_svg(series: &[Series], hole: Option<f64>) -> String {
    let size = PIE_RADIUS * 2.0;
    let (cx, cy, r) = (PIE_RADIUS, PIE_RADIUS, PIE_RADIUS);

    let mut svg = format!(
        r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
        size = size
    );

    if series.iter().any(|s| s.value > 0) {
        let mut angle = -PI / 2.0;
        for s in series.iter().filter(|s| s.value > 0) {
            let sweep = share_of(series, s.value) * 2.0 * PI;
            if sweep >= 2.0 * PI - 1e-9 {
                let _ = write!(
                    svg,
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{color}"><title>{label}</title></circle>"#,
                    color = escape(&s.color),
                    label = escape(&s.label),
                );
            } else {
                let (x1, y1) = (cx + r * angle.cos(), cy + r * angle.sin());
                let end = angle + sweep;
                let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
                let large_arc = if sweep > PI { 1 } else { 0 };
                let _ = write!(
                    svg,
                    r#"<path d="M{cx:.2},{cy:.2} L{x1:.2},{y1:.2} A{r:.2},{r:.2} 0 {large_arc} 1 {x2:.2},{y2:.2} Z" fill="{color}"><title>{label}</title></path>"#,
                    color = escape(&s.color),
                    label = escape(&s.label),
                );
            }
            angle += sweep;
        }
    }

    if let Some(hole) = hole {
        let _ = write!(
            svg,
            r#"<circle cx="{cx}" cy="{cy}" r="{hr:.2}" style="fill: var(--card)"/>"#,
            hr = r * hole
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Horizontal bar chart as SVG, bars scaled to the largest value.
fn bar_svg(series: &[Series]) -> String {
    let max = series.iter().map(|s| s.value).max().unwrap_or(0);
    let label_width = 110.0;
    let height = series.len() as f64 * (BAR_HEIGHT + 4.0);
    let width = label_width + BAR_MAX_WIDTH + 60.0;

    let mut svg = format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#,
    );
    for (i, s) in series.iter().enumerate() {
        let y = i as f64 * (BAR_HEIGHT + 4.0);
        let w = if max > 0 {
            s.value as f64 / max as f64 * BAR_MAX_WIDTH
        } else {
            0.0
        };
        let _ = write!(
            svg,
            r#"<text x="0" y="{ty:.1}">{label}</text><rect x="{label_width}" y="{y:.1}" width="{w:.2}" height="{BAR_HEIGHT}" fill="{color}"><title>{value}</title></rect><text x="{vx:.2}" y="{ty:.1}">{value}</text>"#,
            ty = y + BAR_HEIGHT - 5.0,
            label = escape(&s.label),
            color = escape(&s.color),
            value = s.value,
            vx = label_width + w + 6.0,
        );
    }
    svg.push_str("</svg>");
    svg
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
