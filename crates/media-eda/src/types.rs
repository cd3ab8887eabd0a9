//! Shared data types for the EDA pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Well-known column names of the media catalog dataset.
///
/// The input file may carry additional passthrough columns; those are
/// tolerated and ignored by every stage.
pub mod columns {
    /// Categorical: "Movie" / "TV Show".
    pub const TYPE: &str = "type";
    /// Integer release year.
    pub const RELEASE_YEAR: &str = "release_year";
    /// Free-text content rating.
    pub const RATING: &str = "rating";
    /// Free text, e.g. "90 min" or "2 Seasons".
    pub const DURATION: &str = "duration";
    /// Comma-separated country list, possibly absent.
    pub const COUNTRY: &str = "country";
    /// Comma-separated genre tags.
    pub const LISTED_IN: &str = "listed_in";
    /// Free-text date, possibly malformed or absent.
    pub const DATE_ADDED: &str = "date_added";

    /// Derived: leading integer of `duration`.
    pub const DURATION_NUM: &str = "duration_num";
    /// Derived: "YYYY-MM" bucket of a successfully parsed `date_added`.
    pub const MONTH_ADDED: &str = "month_added";
}

/// The `type` value that marks a movie row.
pub const TYPE_MOVIE: &str = "Movie";
/// The `type` value that marks a TV show row.
pub const TYPE_TV_SHOW: &str = "TV Show";
/// Separator used by multi-value columns (`country`, `listed_in`).
pub const MULTI_VALUE_SEPARATOR: &str = ", ";

/// Structural profile of a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Polars dtype as a display string.
    pub dtype: String,
    /// Number of missing values.
    pub null_count: usize,
    /// Missing values as a percentage of all rows.
    pub null_percentage: f64,
    /// Number of distinct non-null values.
    pub unique_count: usize,
}

/// Structural profile of the whole table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    /// (rows, columns) at profiling time.
    pub shape: (usize, usize),
    /// Per-column profiles, in original column order.
    pub column_profiles: Vec<ColumnProfile>,
    /// (column, missing count) sorted descending by count.
    pub missing_by_column: Vec<(String, usize)>,
    /// Number of rows whose full value tuple matches an earlier row.
    pub duplicate_count: usize,
    /// Duplicate rows as a percentage of all rows.
    pub duplicate_percentage: f64,
}

/// Descriptive statistics for a single column.
///
/// Text columns fill the `top`/`freq` slots; numeric columns fill the
/// moment/quantile slots. Inapplicable slots stay `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    /// Non-null value count.
    pub count: usize,
    /// Distinct non-null value count.
    pub unique: usize,
    /// Most frequent value (text columns).
    pub top: Option<String>,
    /// Frequency of the most frequent value (text columns).
    pub freq: Option<usize>,
    pub mean: Option<f64>,
    /// Sample standard deviation (ddof = 1).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// One entry of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub value: String,
    pub count: usize,
}

/// The derived counts emitted by the summary reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounts {
    /// Total row count.
    pub total_titles: usize,
    /// Rows where `type` equals "Movie".
    pub movies: usize,
    /// Rows where `type` equals "TV Show".
    pub tv_shows: usize,
    /// Distinct countries across the exploded `country` column.
    pub unique_countries: usize,
    /// Distinct genre tags across the exploded `listed_in` column.
    pub unique_genres: usize,
}

/// Everything a completed run produced, for callers and tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaRunResult {
    /// Structural profile taken right after loading.
    pub profile: TableProfile,
    /// Per-column descriptive statistics (after preprocessing).
    pub column_summaries: Vec<ColumnSummary>,
    /// Derived summary counts.
    pub summary: SummaryCounts,
    /// Paths of the chart images actually written.
    pub chart_paths: Vec<PathBuf>,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}
