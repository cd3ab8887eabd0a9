//! Dataset loading.
//!
//! Reads a comma-delimited UTF-8 file with a header row into a polars
//! `DataFrame`, inferring column dtypes from the first rows. No row
//! filtering or validation happens here.

use crate::error::{EdaError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Number of rows used for schema inference.
const INFER_SCHEMA_ROWS: usize = 100;

/// Load the dataset from `path`.
///
/// Fails with [`EdaError::DataAccess`] if the path does not exist or the
/// content cannot be parsed as delimited text.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(EdaError::DataAccess {
            path: path.to_path_buf(),
            reason: "file not found".to_string(),
        });
    }

    // Strategy 1: standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))
        .map_err(|e| data_access(path, &e))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard loading failed: {}", e);
        }
    }

    // Strategy 2: without quote handling
    CsvReadOptions::default()
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))
        .map_err(|e| data_access(path, &e))?
        .finish()
        .map_err(|e| data_access(path, &e))
}

fn data_access(path: &Path, e: &PolarsError) -> EdaError {
    EdaError::DataAccess {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_dataset_basic() {
        let file = write_csv("type,release_year\nMovie,2020\nTV Show,2019\n");
        let df = load_dataset(file.path()).unwrap();

        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.column("release_year").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_load_dataset_quoted_fields() {
        let file = write_csv(
            "country,date_added\n\"India, United States\",\"January 1, 2020\"\n",
        );
        let df = load_dataset(file.path()).unwrap();

        assert_eq!(df.shape(), (1, 2));
        let country = df.column("country").unwrap();
        assert_eq!(
            country.get(0).unwrap().to_string().trim_matches('"'),
            "India, United States"
        );
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let err = load_dataset("definitely/not/here.csv").unwrap_err();
        assert!(err.is_data_access());
        assert_eq!(err.error_code(), "DATA_ACCESS");
    }

    #[test]
    fn test_load_dataset_empty_fields_become_null() {
        let file = write_csv("country,rating\n,PG\nIndia,\n");
        let df = load_dataset(file.path()).unwrap();

        assert_eq!(df.column("country").unwrap().null_count(), 1);
        assert_eq!(df.column("rating").unwrap().null_count(), 1);
    }
}
