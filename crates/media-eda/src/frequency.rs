//! Multi-value explosion and frequency counting.
//!
//! `country` and `listed_in` hold `", "`-separated lists. Frequency
//! analysis splits them and counts each entry independently; the exploded
//! sequences are transient and never written back to the table.

use crate::error::Result;
use crate::types::{FrequencyEntry, MULTI_VALUE_SEPARATOR, SummaryCounts, columns};
use crate::utils::{non_null_strings, require_column};
use polars::prelude::*;
use std::collections::{HashMap, HashSet};

/// Split every non-null value of `series` on `sep` and flatten to one
/// entry per (row, value) pair. Rows with a missing value are excluded.
pub fn explode_multi_value(series: &Series, sep: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for raw in non_null_strings(series)? {
        for part in raw.split(sep) {
            if !part.is_empty() {
                out.push(part.to_string());
            }
        }
    }
    Ok(out)
}

/// Count occurrences, sorted descending by count; ties broken by value
/// ascending so the ordering is deterministic.
pub fn frequency_table<I>(values: I) -> Vec<FrequencyEntry>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(value, count)| FrequencyEntry { value, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    entries
}

/// Frequency table of a plain (non-multi-value) column.
pub fn value_counts(series: &Series) -> Result<Vec<FrequencyEntry>> {
    Ok(frequency_table(non_null_strings(series)?))
}

/// Frequency table of a multi-value column after splitting on `", "`.
pub fn exploded_value_counts(series: &Series) -> Result<Vec<FrequencyEntry>> {
    Ok(frequency_table(explode_multi_value(
        series,
        MULTI_VALUE_SEPARATOR,
    )?))
}

/// Number of distinct entries across the exploded series.
pub fn exploded_distinct_count(series: &Series) -> Result<usize> {
    let values = explode_multi_value(series, MULTI_VALUE_SEPARATOR)?;
    let distinct: HashSet<String> = values.into_iter().collect();
    Ok(distinct.len())
}

/// Compute the derived counts of the summary report.
pub fn compute_summary(df: &DataFrame) -> Result<SummaryCounts> {
    let type_series = require_column(df, columns::TYPE)?;

    let mut movies = 0;
    let mut tv_shows = 0;
    for value in non_null_strings(type_series)? {
        match value.as_str() {
            crate::types::TYPE_MOVIE => movies += 1,
            crate::types::TYPE_TV_SHOW => tv_shows += 1,
            _ => {}
        }
    }

    Ok(SummaryCounts {
        total_titles: df.height(),
        movies,
        tv_shows,
        unique_countries: exploded_distinct_count(require_column(df, columns::COUNTRY)?)?,
        unique_genres: exploded_distinct_count(require_column(df, columns::LISTED_IN)?)?,
    })
}
