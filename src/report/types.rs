//! Report data structures as served by the crawl server.
//!
//! The server is not strict about number types (aggregated sizes may come
//! back as floats) and has used two shapes for category statistics over
//! time, so decoding here is lenient:
//!
//! - category stats: `{"mp3": [size, count, "mp3"]}` or `[[size, count, "mp3"]]`
//! - histogram buckets: `[key, count]` pairs or objects
//! - search metrics: short names or the server's `es_` prefixed names

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single crawl report. Read-only once decoded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    /// Number of files in the report
    #[serde(deserialize_with = "amount")]
    pub total_count: u64,
    /// Total size of all files in bytes
    #[serde(deserialize_with = "amount")]
    pub total_size: u64,
    /// Root URL of the crawled website (empty for global statistics)
    pub base_url: String,
    /// Server-side time the report was generated (UTC, free-form)
    pub report_time: String,
    /// Per-extension statistics
    pub ext_stats: CategoryStats,
    /// Per-mime-type statistics
    pub mime_stats: CategoryStats,
    /// File size histogram, ordered by lower bound
    pub sizes_histogram: Vec<SizeBucket>,
    /// File date histogram, ordered by date
    pub dates_histogram: Vec<DateBucket>,

    #[serde(alias = "es_index_size", skip_serializing_if = "Option::is_none")]
    pub index_size: Option<f64>,
    #[serde(alias = "es_search_count", skip_serializing_if = "Option::is_none")]
    pub search_count: Option<u64>,
    #[serde(alias = "es_search_time", skip_serializing_if = "Option::is_none")]
    pub search_time_ms: Option<f64>,
    #[serde(alias = "es_search_time_avg", skip_serializing_if = "Option::is_none")]
    pub search_time_avg_ms: Option<f64>,
    /// Files with a known, non-zero size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count_nonzero: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_avg: Option<f64>,
    #[serde(alias = "size_std_deviation", skip_serializing_if = "Option::is_none")]
    pub std_deviation: Option<f64>,
    #[serde(alias = "size_variance", skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    #[serde(alias = "size_std_deviation_bounds", skip_serializing_if = "Option::is_none")]
    pub std_deviation_bounds: Option<Bounds>,
}

impl Report {
    /// Decode a report from its JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn totals(&self) -> Totals {
        Totals {
            count: self.total_count,
            size: self.total_size,
        }
    }
}

/// Report-wide totals used as the denominator for relevance checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub count: u64,
    pub size: u64,
}

/// Lower/upper bound pair (one standard deviation around the mean).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

/// Statistics for one category (extension or mime type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    /// Total size of files in this category
    pub size: u64,
    /// Number of files in this category
    pub count: u64,
    /// Display label
    pub label: String,
}

impl CategoryStat {
    pub fn new(size: u64, count: u64, label: impl Into<String>) -> Self {
        Self {
            size,
            count,
            label: label.into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryStatRepr {
    Tuple(Amount, Amount, String),
    Object {
        #[serde(alias = "size_bytes")]
        size: Amount,
        count: Amount,
        #[serde(alias = "display_label", default)]
        label: Option<String>,
    },
}

impl CategoryStatRepr {
    fn into_stat(self, fallback_label: Option<&str>) -> CategoryStat {
        let (size, count, label) = match self {
            CategoryStatRepr::Tuple(size, count, label) => (size, count, Some(label)),
            CategoryStatRepr::Object { size, count, label } => (size, count, label),
        };
        let label = label
            .filter(|l| !l.is_empty())
            .or_else(|| fallback_label.map(str::to_string))
            .unwrap_or_default();
        CategoryStat::new(size.0, count.0, label)
    }
}

/// Category statistics in source order.
///
/// Serialized as a JSON object; insertion order is kept on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStats(Vec<(String, CategoryStat)>);

impl CategoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, stat: CategoryStat) {
        self.0.push((key.into(), stat));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryStat)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn stats(&self) -> impl Iterator<Item = &CategoryStat> {
        self.0.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<CategoryStat> for CategoryStats {
    /// Keys each entry by its label.
    fn from_iter<I: IntoIterator<Item = CategoryStat>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| (s.label.clone(), s)).collect())
    }
}

impl Serialize for CategoryStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, stat) in &self.0 {
            map.serialize_entry(key, &(stat.size, stat.count, &stat.label))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatsVisitor;

        impl<'de> Visitor<'de> for StatsVisitor {
            type Value = CategoryStats;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map or a list of [size, count, label] entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut stats = CategoryStats::new();
                while let Some((key, repr)) = access.next_entry::<String, CategoryStatRepr>()? {
                    let stat = repr.into_stat(Some(&key));
                    stats.push(key, stat);
                }
                Ok(stats)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut stats = CategoryStats::new();
                while let Some(repr) = access.next_element::<CategoryStatRepr>()? {
                    let stat = repr.into_stat(None);
                    stats.push(stat.label.clone(), stat);
                }
                Ok(stats)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CategoryStats::new())
            }
        }

        deserializer.deserialize_any(StatsVisitor)
    }
}

/// One bucket of the file size histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SizeBucketRepr")]
pub struct SizeBucket {
    /// Inclusive lower bound in bytes
    pub lower_bound: u64,
    pub count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeBucketRepr {
    Pair(Amount, Amount),
    Object {
        #[serde(alias = "lower_bound_bytes", alias = "key")]
        lower_bound: Amount,
        #[serde(alias = "doc_count")]
        count: Amount,
    },
}

impl From<SizeBucketRepr> for SizeBucket {
    fn from(repr: SizeBucketRepr) -> Self {
        let (lower_bound, count) = match repr {
            SizeBucketRepr::Pair(b, c) => (b, c),
            SizeBucketRepr::Object { lower_bound, count } => (lower_bound, count),
        };
        Self {
            lower_bound: lower_bound.0,
            count: count.0,
        }
    }
}

/// One bucket of the file date histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DateBucketRepr")]
pub struct DateBucket {
    pub label: String,
    pub count: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateBucketRepr {
    Pair(String, Amount),
    Object {
        #[serde(alias = "date_label", alias = "key_as_string", alias = "date")]
        label: String,
        #[serde(alias = "doc_count")]
        count: Amount,
    },
}

impl From<DateBucketRepr> for DateBucket {
    fn from(repr: DateBucketRepr) -> Self {
        let (label, count) = match repr {
            DateBucketRepr::Pair(l, c) => (l, c),
            DateBucketRepr::Object { label, count } => (label, count),
        };
        Self {
            label,
            count: count.0,
        }
    }
}

/// A non-negative amount that may arrive as an integer or a float.
struct Amount(u64);

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl<'de> Visitor<'de> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative number")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
                Ok(Amount(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
                u64::try_from(v)
                    .map(Amount)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
                if v.is_finite() && v >= 0.0 {
                    Ok(Amount(v.round() as u64))
                } else {
                    Err(E::invalid_value(de::Unexpected::Float(v), &self))
                }
            }

            fn visit_unit<E: de::Error>(self) -> Result<Amount, E> {
                Ok(Amount(0))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Amount::deserialize(deserializer).map(|a| a.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEBSITE_REPORT: &str = r#"{
        "total_count": 120,
        "total_size": 5300000.0,
        "base_url": "http://files.example.com/pub/",
        "report_time": "2018-06-14 21:03:11",
        "ext_stats": {
            "zip": [4000000, 10, "zip"],
            "mp3": [1200000.0, 50, "mp3"],
            "txt": [100000, 60, ""]
        },
        "sizes_histogram": [[0, 70], [1000000, 50]],
        "dates_histogram": [["2018-01", 100], ["2018-02", 20]]
    }"#;

    #[test]
    fn test_decode_website_report() {
        let report = Report::from_json(WEBSITE_REPORT).unwrap();

        assert_eq!(report.total_count, 120);
        assert_eq!(report.total_size, 5_300_000);
        assert_eq!(report.base_url, "http://files.example.com/pub/");
        assert_eq!(report.ext_stats.len(), 3);
        assert!(report.mime_stats.is_empty());
        assert_eq!(report.index_size, None);

        assert_eq!(
            report.sizes_histogram,
            vec![
                SizeBucket { lower_bound: 0, count: 70 },
                SizeBucket { lower_bound: 1_000_000, count: 50 },
            ]
        );
        assert_eq!(report.dates_histogram[1].label, "2018-02");
    }

    #[test]
    fn test_map_form_keeps_source_order() {
        let report = Report::from_json(WEBSITE_REPORT).unwrap();
        let keys: Vec<&str> = report.ext_stats.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zip", "mp3", "txt"]);
    }

    #[test]
    fn test_empty_label_falls_back_to_key() {
        let report = Report::from_json(WEBSITE_REPORT).unwrap();
        let (_, txt) = report.ext_stats.iter().nth(2).unwrap();
        assert_eq!(txt.label, "txt");
        assert_eq!(txt.size, 100_000);
    }

    #[test]
    fn test_list_form_keeps_source_order() {
        let json = r#"{"ext_stats": [[10, 1, "iso"], [30, 3, "avi"], [20, 2, "jpg"]]}"#;
        let report = Report::from_json(json).unwrap();
        let labels: Vec<&str> = report.ext_stats.stats().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["iso", "avi", "jpg"]);
    }

    #[test]
    fn test_object_entries_and_buckets() {
        let json = r#"{
            "mime_stats": {"audio/mpeg": {"size_bytes": 5, "count": 1, "display_label": "audio/mpeg"}},
            "sizes_histogram": [{"lower_bound_bytes": 1000, "count": 4}],
            "dates_histogram": [{"date_label": "2019", "count": 4}]
        }"#;
        let report = Report::from_json(json).unwrap();
        let (key, stat) = report.mime_stats.iter().next().unwrap();
        assert_eq!(key, "audio/mpeg");
        assert_eq!(stat, &CategoryStat::new(5, 1, "audio/mpeg"));
        assert_eq!(report.sizes_histogram[0].lower_bound, 1000);
        assert_eq!(report.dates_histogram[0].label, "2019");
    }

    #[test]
    fn test_decode_server_metric_names() {
        let json = r#"{
            "total_count": 10,
            "total_size": 100,
            "es_index_size": 2048,
            "es_search_count": 7,
            "es_search_time": 30,
            "es_search_time_avg": 4.2857,
            "total_count_nonzero": 9,
            "size_avg": 11.1,
            "size_std_deviation": 3.5,
            "size_variance": 12.25,
            "size_std_deviation_bounds": {"lower": 7.6, "upper": 14.6}
        }"#;
        let report = Report::from_json(json).unwrap();
        assert_eq!(report.index_size, Some(2048.0));
        assert_eq!(report.search_count, Some(7));
        assert_eq!(report.search_time_ms, Some(30.0));
        assert_eq!(report.total_count_nonzero, Some(9));
        assert_eq!(report.variance, Some(12.25));
        assert_eq!(
            report.std_deviation_bounds,
            Some(Bounds { lower: 7.6, upper: 14.6 })
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = Report::from_json(r#"{"total_size": -5}"#).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Report::from_json("{\"total_count\": ").is_err());
        assert!(Report::from_json(r#"{"ext_stats": 12}"#).is_err());
    }

    #[test]
    fn test_serialize_category_stats_as_object() {
        let stats: CategoryStats = vec![CategoryStat::new(3, 1, "gz")].into_iter().collect();
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value, serde_json::json!({"gz": [3, 1, "gz"]}));
    }

    #[test]
    fn test_totals() {
        let report = Report::from_json(WEBSITE_REPORT).unwrap();
        assert_eq!(
            report.totals(),
            Totals {
                count: 120,
                size: 5_300_000
            }
        );
    }
}
