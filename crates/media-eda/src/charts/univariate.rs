//! Univariate charts: missingness, type counts, release years, ratings.

use super::{ChartGenerator, draw_bar_chart};
use super::{FILE_MISSING_HEATMAP, FILE_RELEASE_YEAR, FILE_TOP_RATINGS, FILE_TYPE_DISTRIBUTION};
use crate::frequency::value_counts;
use crate::types::columns;
use crate::utils::require_column;
use plotters::prelude::*;
use polars::prelude::*;
use std::f64::consts::PI;
use std::path::PathBuf;

/// Set2-style green used for the type bars.
const TYPE_BAR_COLOR: RGBColor = RGBColor(102, 194, 165);
/// Teal used for the rating bars.
const RATING_BAR_COLOR: RGBColor = RGBColor(0, 128, 128);
/// Shade used for missing cells in the heatmap.
const MISSING_SHADE: RGBColor = RGBColor(222, 196, 132);

/// Chart 01: rows × columns grid, cell shaded if the value is missing.
/// No row labels.
pub(crate) fn missing_values_heatmap(
    g: &ChartGenerator,
    df: &DataFrame,
) -> anyhow::Result<PathBuf> {
    let nrows = df.height().max(1) as i32;
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let ncols = column_names.len().max(1) as i32;

    g.with_bitmap(FILE_MISSING_HEATMAP, (1200, 500), |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("Missing Values Heatmap", ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(70)
            .y_label_area_size(20)
            .build_cartesian_2d(0i32..ncols, 0i32..nrows)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(ncols as usize)
            .x_label_formatter(&|x| {
                column_names
                    .get(*x as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .y_labels(0)
            .draw()?;

        for (j, col) in df.get_columns().iter().enumerate() {
            let mask = col.as_materialized_series().is_null();
            let cells: Vec<_> = mask
                .into_iter()
                .enumerate()
                .filter(|(_, is_null)| is_null.unwrap_or(false))
                .map(|(i, _)| {
                    Rectangle::new(
                        [(j as i32, i as i32), (j as i32 + 1, i as i32 + 1)],
                        MISSING_SHADE.filled(),
                    )
                })
                .collect();
            chart.draw_series(cells)?;
        }

        Ok(())
    })
}

/// Chart 02: row counts by `type`, each bar annotated with its count.
pub(crate) fn type_distribution(g: &ChartGenerator, df: &DataFrame) -> anyhow::Result<PathBuf> {
    let table = value_counts(require_column(df, columns::TYPE)?)?;
    let labels: Vec<String> = table.iter().map(|e| e.value.clone()).collect();
    let counts: Vec<usize> = table.iter().map(|e| e.count).collect();

    g.with_bitmap(FILE_TYPE_DISTRIBUTION, (600, 400), |root| {
        draw_bar_chart(
            root,
            "Count of Titles by Type",
            "Type",
            "Count",
            &labels,
            &counts,
            TYPE_BAR_COLOR,
            true,
        )
    })
}

/// Chart 03: `release_year` histogram with an overlaid smoothed density
/// curve (Gaussian kernel, Silverman bandwidth, scaled to counts).
pub(crate) fn release_year_distribution(
    g: &ChartGenerator,
    df: &DataFrame,
) -> anyhow::Result<PathBuf> {
    let series = require_column(df, columns::RELEASE_YEAR)?;
    let float_series = series.cast(&DataType::Float64)?;
    let values: Vec<f64> = float_series.f64()?.into_iter().flatten().collect();
    let bins = g.release_year_bins();

    g.with_bitmap(FILE_RELEASE_YEAR, (1000, 500), |root| {
        let (min, max) = value_range(&values);
        let bin_width = (max - min) / bins as f64;

        let mut counts = vec![0usize; bins];
        for v in &values {
            let idx = (((v - min) / bin_width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let curve = density_curve(&values, min, max, bin_width);
        let bar_max = counts.iter().copied().max().unwrap_or(0) as f64;
        let curve_max = curve
            .iter()
            .map(|(_, y)| *y)
            .fold(0.0f64, f64::max);
        let y_max = bar_max.max(curve_max).max(1.0) * 1.15;

        let mut chart = ChartBuilder::on(root)
            .caption("Distribution of Release Year", ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(min..max, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Release Year")
            .y_desc("Count")
            .draw()?;

        chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
            let x0 = min + i as f64 * bin_width;
            Rectangle::new(
                [(x0, 0.0), (x0 + bin_width, count as f64)],
                BLUE.mix(0.5).filled(),
            )
        }))?;

        if !curve.is_empty() {
            chart.draw_series(LineSeries::new(curve, &BLUE))?;
        }

        Ok(())
    })
}

/// Chart 04: the most frequent `rating` values, descending.
pub(crate) fn top_ratings(g: &ChartGenerator, df: &DataFrame) -> anyhow::Result<PathBuf> {
    let mut table = value_counts(require_column(df, columns::RATING)?)?;
    table.truncate(g.top_n());
    let labels: Vec<String> = table.iter().map(|e| e.value.clone()).collect();
    let counts: Vec<usize> = table.iter().map(|e| e.count).collect();
    let caption = format!("Top {} Ratings", g.top_n());

    g.with_bitmap(FILE_TOP_RATINGS, (1000, 500), |root| {
        draw_bar_chart(
            root,
            &caption,
            "Rating",
            "Count",
            &labels,
            &counts,
            RATING_BAR_COLOR,
            false,
        )
    })
}

/// Usable (min, max) range for the histogram, degenerate inputs widened.
fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    (min, max)
}

/// Gaussian KDE sampled over `[min, max]`, scaled to histogram counts
/// (`density * n * bin_width`). Empty when the data has no spread.
fn density_curve(values: &[f64], min: f64, max: f64, bin_width: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return Vec::new();
    }

    let std = crate::profiler::statistics::sample_std(values);
    if std == 0.0 {
        return Vec::new();
    }

    // Silverman's rule of thumb.
    let bandwidth = 1.06 * std * (n as f64).powf(-0.2);
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * PI).sqrt());
    let scale = n as f64 * bin_width;

    const STEPS: usize = 200;
    (0..=STEPS)
        .map(|i| {
            let x = min + (max - min) * i as f64 / STEPS as f64;
            let density: f64 = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect()
}
