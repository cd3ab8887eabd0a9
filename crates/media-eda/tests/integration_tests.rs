//! Integration tests for the EDA pipeline.
//!
//! These tests verify end-to-end behavior over small synthetic catalog
//! exports written to a temp directory.

use media_eda::charts;
use media_eda::{EdaConfig, EdaPipeline, Preprocessor, load_dataset};
use polars::prelude::*;
use std::io::Write;
use std::path::Path;

// ============================================================================
// Helper Functions
// ============================================================================

const SAMPLE_CSV: &str = "\
type,release_year,rating,duration,country,listed_in,date_added
Movie,2020,PG,90 min,United States,Dramas,\"January 1, 2020\"
TV Show,2019,TV-MA,2 Seasons,\"India, United States\",\"Comedies, Dramas\",
Movie,2021,R,120 min,,Horror,not a date
";

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("titles.csv");
    let mut file = std::fs::File::create(&path).expect("Failed to create sample file");
    file.write_all(SAMPLE_CSV.as_bytes())
        .expect("Failed to write sample file");
    path
}

fn run_sample(dir: &Path) -> media_eda::EdaRunResult {
    let config = EdaConfig::builder()
        .input_path(write_sample(dir))
        .output_dir(dir.join("plots"))
        .build()
        .expect("Failed to build config");
    EdaPipeline::new(config).run().expect("Pipeline run failed")
}

// ============================================================================
// Structural Report
// ============================================================================

#[test]
fn test_structure_of_sample_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_sample(dir.path());

    assert_eq!(result.profile.shape, (3, 7));
    assert_eq!(result.profile.duplicate_count, 0);

    // country has one empty field, date_added has one.
    let missing: Vec<(&str, usize)> = result
        .profile
        .missing_by_column
        .iter()
        .map(|(name, count)| (name.as_str(), *count))
        .collect();
    assert!(missing.contains(&("country", 1)));
    assert!(missing.contains(&("date_added", 1)));
    assert!(missing.contains(&("type", 0)));
}

// ============================================================================
// Preprocessing
// ============================================================================

#[test]
fn test_preprocessing_derived_columns() {
    let dir = tempfile::tempdir().unwrap();
    let mut df = load_dataset(write_sample(dir.path())).unwrap();
    Preprocessor::apply(&mut df).unwrap();

    assert_eq!(df.shape(), (3, 9));

    let duration: Vec<Option<i64>> = df
        .column("duration_num")
        .unwrap()
        .i64()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(duration, vec![Some(90), Some(2), Some(120)]);

    // "January 1, 2020" parses; missing and malformed dates both null out.
    let months: Vec<Option<String>> = df
        .column("month_added")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();
    assert_eq!(months, vec![Some("2020-01".to_string()), None, None]);
}

// ============================================================================
// Summary Counts
// ============================================================================

#[test]
fn test_summary_counts() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_sample(dir.path());

    assert_eq!(result.summary.total_titles, 3);
    assert_eq!(result.summary.movies, 2);
    assert_eq!(result.summary.tv_shows, 1);
    // India + United States across the exploded country column.
    assert_eq!(result.summary.unique_countries, 2);
    // Dramas, Comedies, Horror.
    assert_eq!(result.summary.unique_genres, 3);
}

#[test]
fn test_exploded_country_frequencies() {
    let dir = tempfile::tempdir().unwrap();
    let df = load_dataset(write_sample(dir.path())).unwrap();

    let table =
        media_eda::exploded_value_counts(df.column("country").unwrap().as_materialized_series())
            .unwrap();
    assert_eq!(table[0].value, "United States");
    assert_eq!(table[0].count, 2);
    assert_eq!(table[1].value, "India");
    assert_eq!(table[1].count, 1);
}

// ============================================================================
// Charts
// ============================================================================

#[test]
fn test_all_nine_charts_written() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_sample(dir.path());

    assert_eq!(result.chart_paths.len(), 9);
    let expected = [
        charts::FILE_MISSING_HEATMAP,
        charts::FILE_TYPE_DISTRIBUTION,
        charts::FILE_RELEASE_YEAR,
        charts::FILE_TOP_RATINGS,
        charts::FILE_TOP_COUNTRIES,
        charts::FILE_TOP_GENRES,
        charts::FILE_TYPE_BY_YEAR,
        charts::FILE_CORRELATION,
        charts::FILE_MONTHLY_ADDED,
    ];
    for name in expected {
        let path = dir.path().join("plots").join(name);
        assert!(path.exists(), "missing chart {}", path.display());
        let len = std::fs::metadata(&path).unwrap().len();
        assert!(len > 0, "empty chart {}", path.display());
    }
}

// ============================================================================
// Error Paths
// ============================================================================

#[test]
fn test_missing_input_is_data_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = EdaConfig::builder()
        .input_path(dir.path().join("absent.csv"))
        .output_dir(dir.path().join("plots"))
        .build()
        .unwrap();

    let err = EdaPipeline::new(config).run().unwrap_err();
    assert!(err.is_data_access());
    assert_eq!(err.error_code(), "DATA_ACCESS");
}
