//! Structural profiling of the loaded table.
//!
//! Pure reads: shape, per-column dtypes and missing counts, full-row
//! duplicate detection. Descriptive statistics live in [`statistics`].

pub mod statistics;

use crate::error::Result;
use crate::types::{ColumnProfile, TableProfile};
use polars::prelude::*;

/// Profiler for table structure and missing data.
pub struct DataProfiler;

impl DataProfiler {
    /// Profile the dataset: shape, dtypes, missing counts, duplicates.
    pub fn profile_dataset(df: &DataFrame) -> Result<TableProfile> {
        let mut column_profiles = Vec::new();

        for col_name in df.get_column_names() {
            column_profiles.push(Self::profile_column(df, col_name)?);
        }

        // Missing counts sorted descending; stable sort keeps the original
        // column order for ties, so transcripts are reproducible.
        let mut missing_by_column: Vec<(String, usize)> = column_profiles
            .iter()
            .map(|p| (p.name.clone(), p.null_count))
            .collect();
        missing_by_column.sort_by(|a, b| b.1.cmp(&a.1));

        let duplicate_count = df.height()
            - df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?
                .height();
        let duplicate_percentage = if df.height() > 0 {
            (duplicate_count as f64 / df.height() as f64) * 100.0
        } else {
            0.0
        };

        Ok(TableProfile {
            shape: (df.height(), df.width()),
            column_profiles,
            missing_by_column,
            duplicate_count,
            duplicate_percentage,
        })
    }

    fn profile_column(df: &DataFrame, col_name: &str) -> Result<ColumnProfile> {
        let col = df.column(col_name)?;
        let series = col.as_materialized_series();
        let null_count = series.null_count();
        let null_percentage = if df.height() > 0 {
            (null_count as f64 / df.height() as f64) * 100.0
        } else {
            0.0
        };
        let unique_count = series.drop_nulls().n_unique()?;

        Ok(ColumnProfile {
            name: col_name.to_string(),
            dtype: series.dtype().to_string(),
            null_count,
            null_percentage,
            unique_count,
        })
    }
}
