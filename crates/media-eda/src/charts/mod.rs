//! Chart generation.
//!
//! Produces the fixed sequence of nine PNG images from the preprocessed
//! table. Every chart goes through [`ChartGenerator::with_bitmap`], a
//! scoped-acquisition helper (create backend, fill, draw, present, drop)
//! so the drawing surface is released on every exit path and memory does
//! not accumulate across charts. Charts tolerate missing values and empty
//! inputs by rendering an empty frame instead of failing the run.

mod bivariate;
mod temporal;
mod univariate;

use crate::error::{EdaError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use polars::prelude::DataFrame;
use std::path::PathBuf;
use tracing::{debug, info};

/// Output filenames; the numbered prefixes are part of the contract for
/// downstream consumers.
pub const FILE_MISSING_HEATMAP: &str = "01_missing_values_heatmap.png";
pub const FILE_TYPE_DISTRIBUTION: &str = "02_type_distribution.png";
pub const FILE_RELEASE_YEAR: &str = "03_release_year_distribution.png";
pub const FILE_TOP_RATINGS: &str = "04_top_ratings.png";
pub const FILE_TOP_COUNTRIES: &str = "05_top_countries.png";
pub const FILE_TOP_GENRES: &str = "06_top_genres.png";
pub const FILE_TYPE_BY_YEAR: &str = "07_type_by_release_year.png";
pub const FILE_CORRELATION: &str = "08_correlation_matrix.png";
pub const FILE_MONTHLY_ADDED: &str = "09_monthly_titles_added.png";

/// A drawing area rooted on a PNG backend.
pub(crate) type PngArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Renders the chart sequence into an output directory.
pub struct ChartGenerator {
    output_dir: PathBuf,
    top_n: usize,
    release_year_bins: usize,
}

impl ChartGenerator {
    /// Create a generator. The output directory must already exist.
    pub fn new(output_dir: impl Into<PathBuf>, top_n: usize, release_year_bins: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            top_n,
            release_year_bins,
        }
    }

    /// Render every chart in the fixed order, returning the paths written.
    ///
    /// The correlation matrix is skipped (not failed) when fewer than two
    /// numeric columns are available.
    pub fn render_all(&self, df: &DataFrame) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(9);

        paths.push(self.checked(FILE_MISSING_HEATMAP, univariate::missing_values_heatmap(self, df))?);
        paths.push(self.checked(FILE_TYPE_DISTRIBUTION, univariate::type_distribution(self, df))?);
        paths.push(self.checked(FILE_RELEASE_YEAR, univariate::release_year_distribution(self, df))?);
        paths.push(self.checked(FILE_TOP_RATINGS, univariate::top_ratings(self, df))?);
        paths.push(self.checked(FILE_TOP_COUNTRIES, bivariate::top_countries(self, df))?);
        paths.push(self.checked(FILE_TOP_GENRES, bivariate::top_genres(self, df))?);
        paths.push(self.checked(FILE_TYPE_BY_YEAR, bivariate::type_by_release_year(self, df))?);

        match bivariate::correlation_matrix(self, df) {
            Ok(Some(path)) => paths.push(path),
            Ok(None) => debug!("Correlation matrix skipped: fewer than two numeric columns"),
            Err(e) => return Err(chart_error(FILE_CORRELATION, e)),
        }

        paths.push(self.checked(FILE_MONTHLY_ADDED, temporal::monthly_titles_added(self, df))?);

        info!("Rendered {} charts into {}", paths.len(), self.output_dir.display());
        Ok(paths)
    }

    fn checked(&self, chart: &str, result: anyhow::Result<PathBuf>) -> Result<PathBuf> {
        result.map_err(|e| chart_error(chart, e))
    }

    pub(crate) fn top_n(&self) -> usize {
        self.top_n
    }

    pub(crate) fn release_year_bins(&self) -> usize {
        self.release_year_bins
    }

    pub(crate) fn output_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }

    /// Scoped chart rendering: the backend lives only inside this call.
    pub(crate) fn with_bitmap<F>(
        &self,
        filename: &str,
        size: (u32, u32),
        draw: F,
    ) -> anyhow::Result<PathBuf>
    where
        F: FnOnce(&PngArea<'_>) -> anyhow::Result<()>,
    {
        let path = self.output_path(filename);
        {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            root.fill(&WHITE)?;
            draw(&root)?;
            root.present()?;
        } // drawing surface released here
        debug!("Saved chart {}", path.display());
        Ok(path)
    }
}

fn chart_error(chart: &str, e: anyhow::Error) -> EdaError {
    EdaError::ChartRender {
        chart: chart.to_string(),
        reason: e.to_string(),
    }
}

/// Draw a vertical bar chart with index-positioned categories.
///
/// Shared by the type/rating/country/genre charts. `annotate` puts the
/// raw count above each bar.
pub(crate) fn draw_bar_chart(
    root: &PngArea<'_>,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    counts: &[usize],
    color: RGBColor,
    annotate: bool,
) -> anyhow::Result<()> {
    let n = labels.len().max(1);
    let max_count = counts.iter().copied().max().unwrap_or(0).max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(caption, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(70)
        .y_label_area_size(60)
        .build_cartesian_2d(0i32..n as i32, 0f64..max_count * 1.15)?;

    let owned_labels: Vec<String> = labels.to_vec();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            owned_labels
                .get(*x as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
        Rectangle::new(
            [(i as i32, 0.0), (i as i32 + 1, count as f64)],
            color.filled(),
        )
    }))?;

    if annotate {
        chart.draw_series(counts.iter().enumerate().map(|(i, &count)| {
            Text::new(
                count.to_string(),
                (i as i32, count as f64 + max_count * 0.03),
                ("sans-serif", 18),
            )
        }))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn sample_df() -> DataFrame {
        let mut df = df![
            "type" => ["Movie", "TV Show", "Movie"],
            "release_year" => [2020i64, 2019, 2021],
            "rating" => [Some("PG"), Some("TV-MA"), None],
            "duration" => [Some("90 min"), Some("2 Seasons"), Some("120 min")],
            "country" => [Some("United States"), Some("India, United States"), None],
            "listed_in" => ["Dramas", "Comedies, Dramas", "Horror"],
            "date_added" => [Some("January 1, 2020"), None, Some("not a date")],
        ]
        .unwrap();
        crate::prep::Preprocessor::apply(&mut df).unwrap();
        df
    }

    #[test]
    fn test_render_all_produces_nine_files() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ChartGenerator::new(dir.path(), 10, 30);

        let paths = generator.render_all(&sample_df()).unwrap();
        assert_eq!(paths.len(), 9);
        for path in &paths {
            assert!(path.exists(), "missing chart {}", path.display());
        }
    }

    #[test]
    fn test_render_all_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ChartGenerator::new(dir.path(), 10, 30);

        let paths = generator.render_all(&sample_df()).unwrap();
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                FILE_MISSING_HEATMAP,
                FILE_TYPE_DISTRIBUTION,
                FILE_RELEASE_YEAR,
                FILE_TOP_RATINGS,
                FILE_TOP_COUNTRIES,
                FILE_TOP_GENRES,
                FILE_TYPE_BY_YEAR,
                FILE_CORRELATION,
                FILE_MONTHLY_ADDED,
            ]
        );
    }

    #[test]
    fn test_correlation_skipped_without_duration_num() {
        // Without preprocessing there is only one numeric column.
        let df = df![
            "type" => ["Movie"],
            "release_year" => [2020i64],
            "rating" => ["PG"],
            "duration" => ["90 min"],
            "country" => [Some("United States")],
            "listed_in" => ["Dramas"],
            "date_added" => [Some("January 1, 2020")],
            "month_added" => [Some("2020-01")],
        ]
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let generator = ChartGenerator::new(dir.path(), 10, 30);
        let paths = generator.render_all(&df).unwrap();

        assert_eq!(paths.len(), 8);
        assert!(!dir.path().join(FILE_CORRELATION).exists());
    }
}
