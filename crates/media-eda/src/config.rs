//! Configuration for the EDA pipeline.
//!
//! Paths, preview size, and chart parameters are explicit configuration
//! passed into the pipeline entry point (no module-level mutable state),
//! so repeated or test invocations cannot contaminate each other.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a single EDA run.
///
/// Use [`EdaConfig::builder()`] for fluent construction.
///
/// # Example
///
/// ```rust,ignore
/// use media_eda::EdaConfig;
///
/// let config = EdaConfig::builder()
///     .input_path("netflix_titles.csv")
///     .output_dir("plots")
///     .top_n(10)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaConfig {
    /// Path to the comma-delimited input dataset (with header row).
    pub input_path: PathBuf,

    /// Directory that receives the chart images; created if absent.
    /// Default: "plots"
    pub output_dir: PathBuf,

    /// Number of rows shown in the dataset preview section.
    /// Default: 5
    pub preview_rows: usize,

    /// Number of entries kept in top-N frequency charts.
    /// Default: 10
    pub top_n: usize,

    /// Bin count for the release-year histogram.
    /// Default: 30
    pub release_year_bins: usize,

    /// Whether to render chart images at all.
    /// When false only the console report is produced.
    /// Default: true
    pub render_charts: bool,
}

impl Default for EdaConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("netflix_titles.csv"),
            output_dir: PathBuf::from("plots"),
            preview_rows: 5,
            top_n: 10,
            release_year_bins: 30,
            render_charts: true,
        }
    }
}

impl EdaConfig {
    /// Create a new configuration builder.
    pub fn builder() -> EdaConfigBuilder {
        EdaConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.top_n == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "top_n".to_string(),
                value: self.top_n,
            });
        }

        if self.release_year_bins == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "release_year_bins".to_string(),
                value: self.release_year_bins,
            });
        }

        if self.preview_rows == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "preview_rows".to_string(),
                value: self.preview_rows,
            });
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid count for '{field}': {value} (must be at least 1)")]
    InvalidCount { field: String, value: usize },
}

/// Builder for [`EdaConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct EdaConfigBuilder {
    input_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    preview_rows: Option<usize>,
    top_n: Option<usize>,
    release_year_bins: Option<usize>,
    render_charts: Option<bool>,
}

impl EdaConfigBuilder {
    /// Set the path of the input dataset.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the output directory for chart images.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the number of rows shown in the preview section.
    pub fn preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = Some(rows);
        self
    }

    /// Set the number of entries kept in top-N frequency charts.
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    /// Set the bin count for the release-year histogram.
    pub fn release_year_bins(mut self, bins: usize) -> Self {
        self.release_year_bins = Some(bins);
        self
    }

    /// Enable or disable chart rendering.
    pub fn render_charts(mut self, render: bool) -> Self {
        self.render_charts = Some(render);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `EdaConfig` or an error if validation fails.
    pub fn build(self) -> Result<EdaConfig, ConfigValidationError> {
        let defaults = EdaConfig::default();
        let config = EdaConfig {
            input_path: self.input_path.unwrap_or(defaults.input_path),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            preview_rows: self.preview_rows.unwrap_or(defaults.preview_rows),
            top_n: self.top_n.unwrap_or(defaults.top_n),
            release_year_bins: self.release_year_bins.unwrap_or(defaults.release_year_bins),
            render_charts: self.render_charts.unwrap_or(defaults.render_charts),
        };

        config.validate()?;
        Ok(config)
    }
}
