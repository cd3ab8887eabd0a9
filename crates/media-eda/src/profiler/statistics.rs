//! Descriptive statistics for column summaries and correlations.

use crate::error::Result;
use crate::types::ColumnSummary;
use crate::utils::is_numeric_dtype;
use polars::prelude::*;
use std::collections::HashMap;

/// Summarize one column with statistics appropriate to its type.
///
/// Text columns report the most frequent value and its frequency; numeric
/// columns report mean, sample standard deviation, min, quartiles and max.
/// Missing entries reduce the effective count only.
pub fn summarize_column(series: &Series) -> Result<ColumnSummary> {
    let non_null = series.drop_nulls();
    let count = non_null.len();
    let unique = non_null.n_unique()?;

    let mut summary = ColumnSummary {
        name: series.name().to_string(),
        dtype: series.dtype().to_string(),
        count,
        unique,
        top: None,
        freq: None,
        mean: None,
        std: None,
        min: None,
        q25: None,
        median: None,
        q75: None,
        max: None,
    };

    if count == 0 {
        return Ok(summary);
    }

    if is_numeric_dtype(series.dtype()) {
        let values = sorted_values(&non_null)?;

        summary.mean = Some(values.iter().sum::<f64>() / values.len() as f64);
        summary.std = Some(sample_std(&values));
        summary.min = values.first().copied();
        summary.max = values.last().copied();
        summary.q25 = quantile_sorted(&values, 0.25);
        summary.median = quantile_sorted(&values, 0.5);
        summary.q75 = quantile_sorted(&values, 0.75);
    } else if let Some((top, freq)) = mode_with_count(&non_null) {
        summary.top = Some(top);
        summary.freq = Some(freq);
    }

    Ok(summary)
}

/// Non-null values of a numeric series, cast to f64 and sorted ascending.
fn sorted_values(non_null: &Series) -> Result<Vec<f64>> {
    let float_series = non_null.cast(&DataType::Float64)?;
    let mut values: Vec<f64> = float_series.f64()?.into_iter().flatten().collect();
    values.sort_by(|a, b| a.total_cmp(b));
    Ok(values)
}

/// Sample standard deviation (ddof = 1); 0 for fewer than two values.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    variance.sqrt()
}

/// Quantile of an ascending-sorted slice with linear interpolation.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = pos - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Most frequent value and its frequency.
///
/// Ties are broken by value (ascending) so output is deterministic.
fn mode_with_count(non_null: &Series) -> Option<(String, usize)> {
    let str_series = non_null.cast(&DataType::String).ok()?;
    let str_chunked = str_series.str().ok()?;

    let mut value_counts: HashMap<String, usize> = HashMap::new();
    for val in str_chunked.into_iter().flatten() {
        *value_counts.entry(val.to_string()).or_insert(0) += 1;
    }

    value_counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
}

/// Pairwise Pearson correlation over the rows where both series are
/// non-null. `None` when fewer than two pairs remain or a series is
/// constant.
pub fn pearson(a: &Series, b: &Series) -> Result<Option<f64>> {
    let a_f = a.cast(&DataType::Float64)?;
    let b_f = b.cast(&DataType::Float64)?;
    let a_ca = a_f.f64()?;
    let b_ca = b_f.f64()?;

    let pairs: Vec<(f64, f64)> = a_ca
        .into_iter()
        .zip(b_ca.into_iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return Ok(None);
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return Ok(None);
    }

    Ok(Some(cov / (var_x.sqrt() * var_y.sqrt())))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== sample_std tests ====================

    #[test]
    fn test_sample_std_basic() {
        // Mean = 3, variance = 10/4 = 2.5, std ≈ 1.58
        let std = sample_std(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((std - 2.5f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_sample_std_single_value() {
        assert_eq!(sample_std(&[5.0]), 0.0);
    }

    #[test]
    fn test_sample_std_identical_values() {
        assert_eq!(sample_std(&[5.0, 5.0, 5.0]), 0.0);
    }

    // ==================== quantile_sorted tests ====================

    #[test]
    fn test_quantile_median_odd() {
        assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0], 0.5), Some(2.0));
    }

    #[test]
    fn test_quantile_median_even_interpolates() {
        assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0, 4.0], 0.5), Some(2.5));
    }

    #[test]
    fn test_quantile_quartiles() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&values, 0.25), Some(2.0));
        assert_eq!(quantile_sorted(&values, 0.75), Some(4.0));
        assert_eq!(quantile_sorted(&values, 0.0), Some(1.0));
        assert_eq!(quantile_sorted(&values, 1.0), Some(5.0));
    }

    #[test]
    fn test_quantile_empty() {
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    // ==================== summarize_column tests ====================

    #[test]
    fn test_summarize_numeric_column() {
        let series = Series::new("year".into(), &[2019i64, 2020, 2021, 2020]);
        let summary = summarize_column(&series).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.unique, 3);
        assert_eq!(summary.mean, Some(2020.0));
        assert_eq!(summary.min, Some(2019.0));
        assert_eq!(summary.max, Some(2021.0));
        assert_eq!(summary.median, Some(2020.0));
        assert!(summary.top.is_none());
    }

    #[test]
    fn test_summarize_text_column() {
        let series = Series::new("type".into(), &["Movie", "TV Show", "Movie"]);
        let summary = summarize_column(&series).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.unique, 2);
        assert_eq!(summary.top, Some("Movie".to_string()));
        assert_eq!(summary.freq, Some(2));
        assert!(summary.mean.is_none());
    }

    #[test]
    fn test_summarize_counts_exclude_nulls() {
        let series = Series::new("rating".into(), &[Some("PG"), None, Some("PG")]);
        let summary = summarize_column(&series).unwrap();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.unique, 1);
        assert_eq!(summary.freq, Some(2));
    }

    #[test]
    fn test_summarize_all_null_column() {
        let series = Series::new("empty".into(), &[None::<&str>, None]);
        let summary = summarize_column(&series).unwrap();

        assert_eq!(summary.count, 0);
        assert_eq!(summary.unique, 0);
        assert!(summary.top.is_none());
    }

    #[test]
    fn test_mode_tie_broken_by_value() {
        let series = Series::new("type".into(), &["b", "a", "a", "b"]);
        let summary = summarize_column(&series).unwrap();
        assert_eq!(summary.top, Some("a".to_string()));
    }

    // ==================== pearson tests ====================

    #[test]
    fn test_pearson_perfect_positive() {
        let a = Series::new("a".into(), &[1.0f64, 2.0, 3.0]);
        let b = Series::new("b".into(), &[10.0f64, 20.0, 30.0]);
        let r = pearson(&a, &b).unwrap().unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let a = Series::new("a".into(), &[1.0f64, 2.0, 3.0]);
        let b = Series::new("b".into(), &[3.0f64, 2.0, 1.0]);
        let r = pearson(&a, &b).unwrap().unwrap();
        assert!((r + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_skips_null_pairs() {
        let a = Series::new("a".into(), &[Some(1.0f64), Some(2.0), None, Some(3.0)]);
        let b = Series::new("b".into(), &[Some(2.0f64), None, Some(9.0), Some(6.0)]);
        // Only (1,2) and (3,6) remain: perfectly correlated.
        let r = pearson(&a, &b).unwrap().unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pearson_constant_series_is_none() {
        let a = Series::new("a".into(), &[1.0f64, 1.0, 1.0]);
        let b = Series::new("b".into(), &[1.0f64, 2.0, 3.0]);
        assert_eq!(pearson(&a, &b).unwrap(), None);
    }

    #[test]
    fn test_pearson_too_few_pairs_is_none() {
        let a = Series::new("a".into(), &[Some(1.0f64), None]);
        let b = Series::new("b".into(), &[Some(1.0f64), Some(2.0)]);
        assert_eq!(pearson(&a, &b).unwrap(), None);
    }
}
