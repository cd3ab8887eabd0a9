//! Bivariate charts: exploded frequency bars, per-type yearly lines,
//! numeric correlation heatmap.

use super::{ChartGenerator, draw_bar_chart};
use super::{FILE_CORRELATION, FILE_TOP_COUNTRIES, FILE_TOP_GENRES, FILE_TYPE_BY_YEAR};
use crate::frequency::exploded_value_counts;
use crate::profiler::statistics::pearson;
use crate::types::columns;
use crate::utils::{is_numeric_dtype, require_column};
use plotters::prelude::*;
use polars::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

/// Cornflower blue used for country bars.
const COUNTRY_BAR_COLOR: RGBColor = RGBColor(100, 149, 237);
/// Dark orange used for genre bars.
const GENRE_BAR_COLOR: RGBColor = RGBColor(255, 140, 0);

/// Chart 05: most frequent countries after splitting multi-country rows.
pub(crate) fn top_countries(g: &ChartGenerator, df: &DataFrame) -> anyhow::Result<PathBuf> {
    let mut table = exploded_value_counts(require_column(df, columns::COUNTRY)?)?;
    table.truncate(g.top_n());
    let labels: Vec<String> = table.iter().map(|e| e.value.clone()).collect();
    let counts: Vec<usize> = table.iter().map(|e| e.count).collect();
    let caption = format!("Top {} Countries by Number of Titles", g.top_n());

    g.with_bitmap(FILE_TOP_COUNTRIES, (1000, 500), |root| {
        draw_bar_chart(
            root,
            &caption,
            "Country",
            "Number of Titles",
            &labels,
            &counts,
            COUNTRY_BAR_COLOR,
            false,
        )
    })
}

/// Chart 06: most frequent genre tags after the same split treatment.
pub(crate) fn top_genres(g: &ChartGenerator, df: &DataFrame) -> anyhow::Result<PathBuf> {
    let mut table = exploded_value_counts(require_column(df, columns::LISTED_IN)?)?;
    table.truncate(g.top_n());
    let labels: Vec<String> = table.iter().map(|e| e.value.clone()).collect();
    let counts: Vec<usize> = table.iter().map(|e| e.count).collect();
    let caption = format!("Top {} Genres/Categories", g.top_n());

    g.with_bitmap(FILE_TOP_GENRES, (1000, 500), |root| {
        draw_bar_chart(
            root,
            &caption,
            "Genre",
            "Count",
            &labels,
            &counts,
            GENRE_BAR_COLOR,
            false,
        )
    })
}

/// Chart 07: title counts per `release_year`, one line per `type` value.
pub(crate) fn type_by_release_year(g: &ChartGenerator, df: &DataFrame) -> anyhow::Result<PathBuf> {
    let type_series = require_column(df, columns::TYPE)?.cast(&DataType::String)?;
    let year_series = require_column(df, columns::RELEASE_YEAR)?.cast(&DataType::Int64)?;

    // (type, year) -> count; BTreeMap keeps types and years ordered.
    let mut grouped: BTreeMap<String, BTreeMap<i64, usize>> = BTreeMap::new();
    for (opt_type, opt_year) in type_series.str()?.into_iter().zip(year_series.i64()?) {
        if let (Some(type_value), Some(year)) = (opt_type, opt_year) {
            *grouped
                .entry(type_value.to_string())
                .or_default()
                .entry(year)
                .or_insert(0) += 1;
        }
    }

    let year_min = grouped
        .values()
        .flat_map(|by_year| by_year.keys().copied())
        .min()
        .unwrap_or(0);
    let year_max = grouped
        .values()
        .flat_map(|by_year| by_year.keys().copied())
        .max()
        .unwrap_or(1);
    let count_max = grouped
        .values()
        .flat_map(|by_year| by_year.values().copied())
        .max()
        .unwrap_or(0)
        .max(1) as f64;

    g.with_bitmap(FILE_TYPE_BY_YEAR, (1200, 600), |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("Movies vs TV Shows by Release Year", ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(year_min..year_max + 1, 0f64..count_max * 1.15)?;

        chart
            .configure_mesh()
            .x_desc("Release Year")
            .y_desc("Number of Titles")
            .draw()?;

        for (idx, (type_value, by_year)) in grouped.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            let points: Vec<(i64, f64)> = by_year
                .iter()
                .map(|(&year, &count)| (year, count as f64))
                .collect();
            chart
                .draw_series(LineSeries::new(points, color.stroke_width(2)))?
                .label(type_value.clone())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
        }

        if !grouped.is_empty() {
            chart
                .configure_series_labels()
                .border_style(BLACK)
                .background_style(WHITE.mix(0.8))
                .draw()?;
        }

        Ok(())
    })
}

/// Chart 08: annotated Pearson correlation heatmap over the numeric
/// columns. Returns `None` (skip) when fewer than two are available.
pub(crate) fn correlation_matrix(
    g: &ChartGenerator,
    df: &DataFrame,
) -> anyhow::Result<Option<PathBuf>> {
    let numeric_cols: Vec<String> = [columns::RELEASE_YEAR, columns::DURATION_NUM]
        .iter()
        .filter(|name| {
            df.column(name)
                .map(|col| is_numeric_dtype(col.dtype()))
                .unwrap_or(false)
        })
        .map(|name| name.to_string())
        .collect();

    if numeric_cols.len() < 2 {
        return Ok(None);
    }

    let k = numeric_cols.len();
    let mut matrix: HashMap<(usize, usize), f64> = HashMap::new();
    for (i, a) in numeric_cols.iter().enumerate() {
        for (j, b) in numeric_cols.iter().enumerate() {
            let r = if i == j {
                Some(1.0)
            } else {
                pearson(
                    require_column(df, a)?,
                    require_column(df, b)?,
                )?
            };
            matrix.insert((i, j), r.unwrap_or(f64::NAN));
        }
    }

    let path = g.with_bitmap(FILE_CORRELATION, (600, 400), |root| {
        let mut chart = ChartBuilder::on(root)
            .caption("Correlation Matrix (Numeric Features)", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(0i32..k as i32, 0i32..k as i32)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(k)
            .x_label_formatter(&|x| {
                numeric_cols
                    .get(*x as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .y_labels(k)
            .y_label_formatter(&|y| {
                numeric_cols
                    .get(*y as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .draw()?;

        for i in 0..k {
            for j in 0..k {
                let r = matrix[&(i, j)];
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(j as i32, i as i32), (j as i32 + 1, i as i32 + 1)],
                    blues_shade(r).filled(),
                )))?;

                let text_color = if shade_fraction(r) > 0.6 { WHITE } else { BLACK };
                chart.draw_series(std::iter::once(Text::new(
                    format!("{:.2}", r),
                    (j as i32, i as i32),
                    ("sans-serif", 20).into_font().color(&text_color),
                )))?;
            }
        }

        Ok(())
    })?;

    Ok(Some(path))
}

/// Map a correlation in [-1, 1] to a fraction of the blue ramp.
fn shade_fraction(r: f64) -> f64 {
    if r.is_nan() {
        return 0.0;
    }
    ((r + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Light-to-dark blue ramp, in the spirit of the "Blues" colormap.
fn blues_shade(r: f64) -> RGBColor {
    let t = shade_fraction(r);
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(247, 8), lerp(251, 48), lerp(255, 107))
}
