//! Chart preparation: relevance filtering, series building and colors.

pub mod category;
pub mod color;
pub mod relevance;
pub mod series;

pub use category::Category;
pub use color::{assign_color, ColorPicker};
pub use relevance::{classify_relevant, Metric, RelevanceRule};
pub use series::{build_series, Chart, ChartKind, Series, SeriesEntry, OTHER_LABEL};
