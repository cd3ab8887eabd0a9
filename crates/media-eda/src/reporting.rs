//! Console report rendering.
//!
//! Each section is rendered to a `String` first so tests can assert on
//! the exact text; the `print_*` wrappers write to stdout. Section order
//! and headings are stable output for people piping the report around.

use crate::types::{ColumnSummary, SummaryCounts, TableProfile};
use polars::prelude::DataFrame;
use std::fmt::Write as _;
use std::path::Path;

/// Width of the name column in aligned sections.
const NAME_WIDTH: usize = 20;

/// Renders the console sections of an EDA run.
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// First `preview_rows` rows of the table, via the polars formatter.
    pub fn render_preview(df: &DataFrame, preview_rows: usize) -> String {
        let mut out = String::new();
        writeln!(out, "=== Dataset Preview ===").ok();
        writeln!(out, "{}", df.head(Some(preview_rows))).ok();
        out
    }

    /// Row and column counts.
    pub fn render_shape(profile: &TableProfile) -> String {
        let mut out = String::new();
        writeln!(out, "=== Shape (rows, columns) ===").ok();
        writeln!(out, "Rows: {}", profile.shape.0).ok();
        writeln!(out, "Columns: {}", profile.shape.1).ok();
        out
    }

    /// One line per column: name and dtype, in original order.
    pub fn render_dtypes(profile: &TableProfile) -> String {
        let mut out = String::new();
        writeln!(out, "=== Column Data Types ===").ok();
        for col in &profile.column_profiles {
            writeln!(out, "{:<NAME_WIDTH$} {}", col.name, col.dtype).ok();
        }
        out
    }

    /// Missing-value counts, most affected column first.
    pub fn render_missing(profile: &TableProfile) -> String {
        let mut out = String::new();
        writeln!(out, "=== Missing Values (count) ===").ok();
        for (name, count) in &profile.missing_by_column {
            writeln!(out, "{:<NAME_WIDTH$} {}", name, count).ok();
        }
        out
    }

    /// Fully duplicated row count and share.
    pub fn render_duplicates(profile: &TableProfile) -> String {
        let mut out = String::new();
        writeln!(out, "=== Duplicate Rows ===").ok();
        writeln!(
            out,
            "Duplicate rows: {} ({:.2}%)",
            profile.duplicate_count, profile.duplicate_percentage
        )
        .ok();
        out
    }

    /// Per-column descriptive statistics; inapplicable cells show "-".
    pub fn render_describe(summaries: &[ColumnSummary]) -> String {
        let mut out = String::new();
        writeln!(out, "=== Descriptive Statistics ===").ok();
        writeln!(
            out,
            "{:<NAME_WIDTH$} {:>8} {:>8} {:>12} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
            "column", "count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%", "max"
        )
        .ok();
        for s in summaries {
            writeln!(
                out,
                "{:<NAME_WIDTH$} {:>8} {:>8} {:>12} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
                s.name,
                s.count,
                s.unique,
                s.top.as_deref().unwrap_or("-"),
                opt_count(s.freq),
                opt_stat(s.mean),
                opt_stat(s.std),
                opt_stat(s.min),
                opt_stat(s.q25),
                opt_stat(s.median),
                opt_stat(s.q75),
                opt_stat(s.max),
            )
            .ok();
        }
        out
    }

    /// The closing quick-summary section.
    pub fn render_summary(summary: &SummaryCounts, output_dir: &Path) -> String {
        let mut out = String::new();
        writeln!(out, "=== Key EDA Findings (Quick Summary) ===").ok();
        writeln!(out, "- Total titles: {}", summary.total_titles).ok();
        writeln!(out, "- Movies: {}", summary.movies).ok();
        writeln!(out, "- TV Shows: {}", summary.tv_shows).ok();
        writeln!(out, "- Unique countries: {}", summary.unique_countries).ok();
        writeln!(out, "- Unique genres/categories: {}", summary.unique_genres).ok();
        writeln!(out, "- Plots saved to {}", output_dir.display()).ok();
        out
    }

    /// Print the structural sections (preview, shape, dtypes, missing,
    /// duplicates) in report order.
    pub fn print_structure(df: &DataFrame, profile: &TableProfile, preview_rows: usize) {
        print!("{}", Self::render_preview(df, preview_rows));
        print!("{}", Self::render_shape(profile));
        print!("{}", Self::render_dtypes(profile));
        print!("{}", Self::render_missing(profile));
        print!("{}", Self::render_duplicates(profile));
    }

    pub fn print_describe(summaries: &[ColumnSummary]) {
        print!("{}", Self::render_describe(summaries));
    }

    pub fn print_summary(summary: &SummaryCounts, output_dir: &Path) {
        print!("{}", Self::render_summary(summary, output_dir));
    }
}

fn opt_stat(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

fn opt_count(v: Option<usize>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnProfile;
    use polars::prelude::*;
    use std::path::PathBuf;

    fn sample_profile() -> TableProfile {
        TableProfile {
            shape: (3, 2),
            column_profiles: vec![
                ColumnProfile {
                    name: "type".to_string(),
                    dtype: "str".to_string(),
                    null_count: 0,
                    null_percentage: 0.0,
                    unique_count: 2,
                },
                ColumnProfile {
                    name: "country".to_string(),
                    dtype: "str".to_string(),
                    null_count: 1,
                    null_percentage: 33.33,
                    unique_count: 2,
                },
            ],
            missing_by_column: vec![("country".to_string(), 1), ("type".to_string(), 0)],
            duplicate_count: 0,
            duplicate_percentage: 0.0,
        }
    }

    #[test]
    fn test_render_preview_has_heading() {
        let df = df!["type" => ["Movie", "TV Show"]].unwrap();
        let text = ConsoleReporter::render_preview(&df, 5);
        assert!(text.starts_with("=== Dataset Preview ==="));
        assert!(text.contains("Movie"));
    }

    #[test]
    fn test_render_shape() {
        let text = ConsoleReporter::render_shape(&sample_profile());
        assert!(text.contains("=== Shape (rows, columns) ==="));
        assert!(text.contains("Rows: 3"));
        assert!(text.contains("Columns: 2"));
    }

    #[test]
    fn test_render_dtypes_in_order() {
        let text = ConsoleReporter::render_dtypes(&sample_profile());
        assert!(text.contains("=== Column Data Types ==="));
        let type_pos = text.find("type").unwrap();
        let country_pos = text.find("country").unwrap();
        assert!(type_pos < country_pos);
    }

    #[test]
    fn test_render_missing_sorted() {
        let text = ConsoleReporter::render_missing(&sample_profile());
        assert!(text.contains("=== Missing Values (count) ==="));
        let country_pos = text.find("country").unwrap();
        let type_pos = text.find("type").unwrap();
        assert!(country_pos < type_pos);
    }

    #[test]
    fn test_render_duplicates() {
        let text = ConsoleReporter::render_duplicates(&sample_profile());
        assert!(text.contains("=== Duplicate Rows ==="));
        assert!(text.contains("Duplicate rows: 0 (0.00%)"));
    }

    #[test]
    fn test_render_describe_dashes_for_inapplicable() {
        let summaries = vec![ColumnSummary {
            name: "type".to_string(),
            dtype: "str".to_string(),
            count: 3,
            unique: 2,
            top: Some("Movie".to_string()),
            freq: Some(2),
            mean: None,
            std: None,
            min: None,
            q25: None,
            median: None,
            q75: None,
            max: None,
        }];
        let text = ConsoleReporter::render_describe(&summaries);
        assert!(text.contains("=== Descriptive Statistics ==="));
        assert!(text.contains("Movie"));
        assert!(text.contains(" - "));
    }

    #[test]
    fn test_render_summary_labels() {
        let summary = SummaryCounts {
            total_titles: 3,
            movies: 2,
            tv_shows: 1,
            unique_countries: 2,
            unique_genres: 3,
        };
        let text = ConsoleReporter::render_summary(&summary, &PathBuf::from("plots"));
        assert!(text.contains("=== Key EDA Findings (Quick Summary) ==="));
        assert!(text.contains("- Total titles: 3"));
        assert!(text.contains("- Movies: 2"));
        assert!(text.contains("- TV Shows: 1"));
        assert!(text.contains("- Unique countries: 2"));
        assert!(text.contains("- Unique genres/categories: 3"));
        assert!(text.contains("- Plots saved to plots"));
    }
}
