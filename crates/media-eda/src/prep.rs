//! Light preprocessing for EDA.
//!
//! Two mutation points, both additive: `date_added` is parsed into a
//! calendar date (with a `month_added` bucket alongside), and the leading
//! integer of `duration` lands in a numeric `duration_num` column. Rows
//! are never discarded or reordered; per-value parse failures degrade to
//! nulls instead of aborting the run.

use crate::error::Result;
use crate::types::columns;
use crate::utils::require_column;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;
use tracing::debug;

/// First contiguous run of decimal digits.
static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Accepted textual date layouts: month name, day, comma, year — with an
/// optional leading day name.
const DATE_FORMATS: [&str; 2] = ["%B %d, %Y", "%A, %B %d, %Y"];

/// Parse one `date_added` value; `None` on any failure.
pub fn parse_catalog_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Extract the first contiguous run of decimal digits, e.g. "90 min" -> 90.
pub fn leading_integer(raw: &str) -> Option<i64> {
    LEADING_DIGITS
        .find(raw)
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Format a date as its "YYYY-MM" month bucket.
pub fn month_bucket(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn days_since_epoch(date: NaiveDate) -> i32 {
    const EPOCH: NaiveDate = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    date.signed_duration_since(EPOCH).num_days() as i32
}

/// The additive preprocessing stage.
pub struct Preprocessor;

impl Preprocessor {
    /// Apply both transformations in place.
    ///
    /// Adds `month_added` and `duration_num`, converts `date_added` to a
    /// `Date` column. Row count and order are invariant.
    pub fn apply(df: &mut DataFrame) -> Result<()> {
        let rows_before = df.height();

        Self::convert_date_added(df)?;
        Self::extract_duration(df)?;

        debug_assert_eq!(rows_before, df.height());
        Ok(())
    }

    /// Parse `date_added` into a `Date` column and add `month_added`.
    fn convert_date_added(df: &mut DataFrame) -> Result<()> {
        let series = require_column(df, columns::DATE_ADDED)?.clone();
        let len = series.len();

        let mut days: Vec<Option<i32>> = Vec::with_capacity(len);
        let mut months: Vec<Option<String>> = Vec::with_capacity(len);

        match series.str() {
            Ok(str_series) => {
                for opt_val in str_series.into_iter() {
                    match opt_val.and_then(parse_catalog_date) {
                        Some(date) => {
                            days.push(Some(days_since_epoch(date)));
                            months.push(Some(month_bucket(date)));
                        }
                        None => {
                            days.push(None);
                            months.push(None);
                        }
                    }
                }

                let parsed = Series::new(columns::DATE_ADDED.into(), days)
                    .cast(&DataType::Date)?;
                let failed = parsed.null_count() - series.null_count();
                if failed > 0 {
                    debug!("{} date_added values failed to parse", failed);
                }
                df.replace(columns::DATE_ADDED, parsed)?;
            }
            Err(_) => {
                // Already non-text (e.g. a repeated run on a parsed table):
                // leave the column alone, derive the buckets if it is a date.
                if series.dtype() == &DataType::Date {
                    let date_series = series.cast(&DataType::Int32)?;
                    let physical = date_series.i32()?;
                    for opt_day in physical.into_iter() {
                        months.push(opt_day.and_then(|d| {
                            NaiveDate::from_num_days_from_ce_opt(d + 719_163)
                                .map(month_bucket)
                        }));
                    }
                } else {
                    months.resize(len, None);
                }
            }
        }

        df.with_column(Series::new(columns::MONTH_ADDED.into(), months))?;
        Ok(())
    }

    /// Add `duration_num` with the leading integer of each `duration` value.
    fn extract_duration(df: &mut DataFrame) -> Result<()> {
        let series = require_column(df, columns::DURATION)?.clone();
        let len = series.len();

        let nums: Vec<Option<i64>> = match series.str() {
            Ok(str_series) => str_series
                .into_iter()
                .map(|opt_val| opt_val.and_then(leading_integer))
                .collect(),
            Err(_) => {
                // Numeric duration columns pass through unchanged.
                match series.cast(&DataType::Int64) {
                    Ok(cast) => cast.i64()?.into_iter().collect(),
                    Err(_) => vec![None; len],
                }
            }
        };

        df.with_column(Series::new(columns::DURATION_NUM.into(), nums))?;
        Ok(())
    }
}
