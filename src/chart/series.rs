//! Chart-ready series built from category statistics.

use super::color::ColorPicker;
use super::relevance::{Metric, RelevanceRule};
use crate::report::{CategoryStats, DateBucket, SizeBucket, Totals};
use crate::utils::human_bytes;
use serde::{Deserialize, Serialize};

/// Label of the synthetic slice collecting non-relevant categories.
pub const OTHER_LABEL: &str = "other";

/// One relevant category, or the aggregated "other" bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesEntry {
    pub size: u64,
    pub count: u64,
    pub label: String,
    pub is_other: bool,
}

/// Partition categories into relevant entries (source order) followed by at
/// most one "other" entry holding the sum of everything else.
///
/// "other" is only emitted when it holds at least one file.
pub fn build_series(stats: &CategoryStats, totals: Totals, rule: &RelevanceRule) -> Vec<SeriesEntry> {
    let mut entries = Vec::with_capacity(stats.len() + 1);
    let mut other_size = 0u64;
    let mut other_count = 0u64;

    for stat in stats.stats() {
        if rule.is_relevant(stat, totals) {
            entries.push(SeriesEntry {
                size: stat.size,
                count: stat.count,
                label: stat.label.clone(),
                is_other: false,
            });
        } else {
            other_size = other_size.saturating_add(stat.size);
            other_count = other_count.saturating_add(stat.count);
        }
    }

    if other_count > 0 {
        entries.push(SeriesEntry {
            size: other_size,
            count: other_count,
            label: OTHER_LABEL.to_string(),
            is_other: true,
        });
    }

    entries
}

/// Chart type handed to the chart collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Doughnut,
    Bar,
}

/// One chart data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Display label, e.g. `"mp3 x50 (1.2 MB)"`
    pub label: String,
    pub size: u64,
    pub count: u64,
    /// Plotted value (count or size, per the chart metric)
    pub value: u64,
    /// `#RRGGBB`
    pub color: String,
}

/// A fully prepared chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    /// Stable identifier (`"types"`, `"sizes"`, `"dates"`)
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    pub metric: Metric,
    pub series: Vec<Series>,
}

impl Chart {
    /// Sum of plotted values, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.series
            .iter()
            .map(|s| s.value)
            .fold(0u64, u64::saturating_add)
    }

    /// Fraction of the whole chart that `value` represents, in `0.0..=1.0`.
    /// Summed in `f64`, so it holds past `u64::MAX`.
    pub fn share(&self, value: u64) -> f64 {
        share_of(&self.series, value)
    }
}

pub(crate) fn share_of(series: &[Series], value: u64) -> f64 {
    let total: f64 = series.iter().map(|s| s.value as f64).sum();
    if total > 0.0 {
        value as f64 / total
    } else {
        0.0
    }
}

/// Label format shared by category slices: `"<label> x<count> (<size>)"`.
pub fn entry_label(entry: &SeriesEntry) -> String {
    format!("{} x{} ({})", entry.label, entry.count, human_bytes(entry.size))
}

/// Build the category chart (pie or doughnut) for one stats mapping.
pub fn category_chart(
    id: &str,
    kind: ChartKind,
    title: String,
    stats: &CategoryStats,
    totals: Totals,
    rule: &RelevanceRule,
    colors: &mut ColorPicker,
) -> Chart {
    let metric = rule.metric(totals);
    let series = build_series(stats, totals, rule)
        .into_iter()
        .map(|entry| Series {
            label: entry_label(&entry),
            size: entry.size,
            count: entry.count,
            value: match metric {
                Metric::Count => entry.count,
                Metric::Size => entry.size,
            },
            color: colors.pick(&entry.label),
        })
        .collect();

    Chart {
        id: id.to_string(),
        kind,
        title,
        metric,
        series,
    }
}

/// Bar chart of the file size histogram. Buckets are labelled by their
/// lower bound.
pub fn sizes_chart(buckets: &[SizeBucket], colors: &mut ColorPicker) -> Chart {
    let series = buckets
        .iter()
        .map(|b| Series {
            label: format!("≥ {}", lower_bound_label(b.lower_bound)),
            size: 0,
            count: b.count,
            value: b.count,
            color: colors.pick(OTHER_LABEL),
        })
        .collect();

    Chart {
        id: "sizes".to_string(),
        kind: ChartKind::Bar,
        title: "File sizes".to_string(),
        metric: Metric::Count,
        series,
    }
}

/// Bar chart of the file date histogram.
pub fn dates_chart(buckets: &[DateBucket], colors: &mut ColorPicker) -> Chart {
    let series = buckets
        .iter()
        .map(|b| Series {
            label: b.label.clone(),
            size: 0,
            count: b.count,
            value: b.count,
            color: colors.pick(OTHER_LABEL),
        })
        .collect();

    Chart {
        id: "dates".to_string(),
        kind: ChartKind::Bar,
        title: "File dates".to_string(),
        metric: Metric::Count,
        series,
    }
}

// The first size bucket starts at zero, which the byte formatter would
// render as unknown.
fn lower_bound_label(bound: u64) -> String {
    if bound == 0 {
        "0 B".to_string()
    } else {
        human_bytes(bound)
    }
}
