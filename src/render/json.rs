//! Machine-readable output of the prepared charts and table fields.

use super::{ChartSink, TableSink};
use crate::chart::Chart;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Serialize)]
struct Field {
    key: String,
    value: String,
}

/// Collects everything it receives and writes it as one JSON document.
#[derive(Debug, Serialize)]
pub struct JsonView {
    generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unavailable: Option<String>,
    charts: Vec<Chart>,
    fields: Vec<Field>,
}

impl JsonView {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            unavailable: None,
            charts: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn finish<W: Write>(&self, writer: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

impl Default for JsonView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSink for JsonView {
    fn draw(&mut self, chart: &Chart) -> Result<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

impl TableSink for JsonView {
    fn write_field(&mut self, key: &str, value: &str) -> Result<()> {
        self.fields.push(Field {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn unavailable(&mut self, reason: &str) -> Result<()> {
        self.unavailable = Some(reason.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartKind, Metric, Series};
    use serde_json::json;

    #[test]
    fn test_json_view_shape() {
        let mut view = JsonView::new();
        view.draw(&Chart {
            id: "types".into(),
            kind: ChartKind::Doughnut,
            title: "Mime types - 1.0 kB".into(),
            metric: Metric::Count,
            series: vec![Series {
                label: "text/plain x2 (1.0 kB)".into(),
                size: 1000,
                count: 2,
                value: 2,
                color: "#1C7ED6".into(),
            }],
        })
        .unwrap();
        view.write_field("totalCount", "2").unwrap();

        let value = view.to_value().unwrap();
        assert_eq!(value["charts"][0]["kind"], json!("doughnut"));
        assert_eq!(value["charts"][0]["metric"], json!("count"));
        assert_eq!(value["charts"][0]["series"][0]["value"], json!(2));
        assert_eq!(value["fields"][0], json!({"key": "totalCount", "value": "2"}));
        assert!(value.get("unavailable").is_none());
        assert!(value["generated_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_unavailable_is_reported() {
        let mut view = JsonView::new();
        view.unavailable("Network error").unwrap();
        let mut out = Vec::new();
        view.finish(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#""unavailable": "Network error""#));
        assert!(text.ends_with("}\n"));
    }
}
