//! Relevance rule deciding which categories get their own chart slice.

use crate::report::{CategoryStat, Totals};
use serde::{Deserialize, Serialize};

/// Total size (bytes) below which a report is charted by file count.
pub const DEFAULT_SIZE_THRESHOLD: u64 = 100_000;
/// Share of the total count a category needs in count mode.
pub const DEFAULT_COUNT_FRACTION: f64 = 0.03;
/// Share of the total size a category needs in size mode.
pub const DEFAULT_SIZE_FRACTION: f64 = 0.005;

/// Which value a chart plots for each slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Count,
    Size,
}

/// Thresholds for folding small categories into "other".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceRule {
    pub size_threshold: u64,
    pub count_fraction: f64,
    pub size_fraction: f64,
}

impl Default for RelevanceRule {
    fn default() -> Self {
        Self {
            size_threshold: DEFAULT_SIZE_THRESHOLD,
            count_fraction: DEFAULT_COUNT_FRACTION,
            size_fraction: DEFAULT_SIZE_FRACTION,
        }
    }
}

impl RelevanceRule {
    /// Small reports are charted by count, everything else by size.
    pub fn metric(&self, totals: Totals) -> Metric {
        if totals.size < self.size_threshold {
            Metric::Count
        } else {
            Metric::Size
        }
    }

    /// Whether `stat` is shown individually rather than folded into "other".
    ///
    /// A zero denominator disables filtering: every category is relevant.
    pub fn is_relevant(&self, stat: &CategoryStat, totals: Totals) -> bool {
        match self.metric(totals) {
            Metric::Count => {
                totals.count == 0 || stat.count as f64 > self.count_fraction * totals.count as f64
            }
            Metric::Size => {
                totals.size == 0 || stat.size as f64 > self.size_fraction * totals.size as f64
            }
        }
    }
}

/// Free-function form of [`RelevanceRule::is_relevant`] with the default
/// fractions and a caller-chosen size threshold.
pub fn classify_relevant(stat: &CategoryStat, totals: Totals, size_threshold: u64) -> bool {
    RelevanceRule {
        size_threshold,
        ..RelevanceRule::default()
    }
    .is_relevant(stat, totals)
}
