//! Temporal chart: titles added to the catalog per month.

use super::{ChartGenerator, FILE_MONTHLY_ADDED};
use crate::frequency::value_counts;
use crate::types::columns;
use crate::utils::require_column;
use plotters::prelude::*;
use polars::prelude::*;
use std::path::PathBuf;

/// Chart 09: number of titles added per `month_added` bucket, in
/// chronological order. Rows whose catalog date failed to parse have a
/// null bucket and are left out; an all-null column yields an empty frame.
pub(crate) fn monthly_titles_added(g: &ChartGenerator, df: &DataFrame) -> anyhow::Result<PathBuf> {
    let mut table = value_counts(require_column(df, columns::MONTH_ADDED)?)?;
    // "YYYY-MM" sorts chronologically as text.
    table.sort_by(|a, b| a.value.cmp(&b.value));

    let months: Vec<String> = table.iter().map(|e| e.value.clone()).collect();
    let counts: Vec<usize> = table.iter().map(|e| e.count).collect();
    let n = months.len().max(1);
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1) as f64;

    g.with_bitmap(FILE_MONTHLY_ADDED, (1200, 500), |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("Monthly Trend of Titles Added", ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(70)
            .y_label_area_size(60)
            .build_cartesian_2d(0i32..n as i32, 0f64..max_count * 1.15)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(n.min(24))
            .x_label_formatter(&|x| months.get(*x as usize).cloned().unwrap_or_default())
            .x_desc("Month Added")
            .y_desc("Number of Titles")
            .draw()?;

        if !counts.is_empty() {
            chart.draw_series(LineSeries::new(
                counts
                    .iter()
                    .enumerate()
                    .map(|(i, &count)| (i as i32, count as f64)),
                &BLUE,
            ))?;
        }

        Ok(())
    })
}
