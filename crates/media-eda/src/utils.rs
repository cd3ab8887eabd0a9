//! Shared utilities for the EDA pipeline.

use crate::error::{EdaError, Result};
use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType is a date/datetime type.
#[inline]
pub fn is_temporal_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time
    )
}

/// Get the dtype category as a display string.
pub fn dtype_category_str(dtype: &DataType) -> &'static str {
    if is_numeric_dtype(dtype) {
        "numeric"
    } else if is_temporal_dtype(dtype) {
        "datetime"
    } else if matches!(dtype, DataType::String | DataType::Categorical(_, _)) {
        "text"
    } else {
        "other"
    }
}

// =============================================================================
// DataFrame Access
// =============================================================================

/// Fetch a column as a materialized series, mapping the polars "not found"
/// error to [`EdaError::ColumnNotFound`].
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map(|c| c.as_materialized_series())
        .map_err(|_| EdaError::ColumnNotFound(name.to_string()))
}

/// Collect the non-null values of a string-typed series.
pub fn non_null_strings(series: &Series) -> Result<Vec<String>> {
    let mut values = Vec::new();
    if let Ok(str_series) = series.str() {
        for val in str_series.into_iter().flatten() {
            values.push(val.to_string());
        }
    } else {
        // Non-string columns are stringified value by value.
        for i in 0..series.len() {
            let val = series.get(i)?;
            if !matches!(val, AnyValue::Null) {
                values.push(format!("{}", val));
            }
        }
    }
    Ok(values)
}
