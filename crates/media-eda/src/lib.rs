//! Media Catalog EDA Library
//!
//! A one-shot exploratory data analysis pipeline for media catalog
//! exports (streaming titles and similar tabular catalogs), built with
//! Rust and Polars.
//!
//! # Overview
//!
//! Running the pipeline over a comma-delimited catalog export produces:
//!
//! - **Structural Report**: preview, shape, dtypes, missing-value counts,
//!   full-row duplicate detection
//! - **Preprocessing**: parsed catalog dates, numeric duration extraction
//!   (per-value parse failures degrade to nulls, never errors)
//! - **Descriptive Statistics**: type-aware column summaries
//! - **Charts**: a fixed sequence of nine PNG images
//! - **Quick Summary**: derived headline counts
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use media_eda::{EdaConfig, EdaPipeline};
//!
//! let config = EdaConfig::builder()
//!     .input_path("netflix_titles.csv")
//!     .output_dir("plots")
//!     .top_n(10)
//!     .build()?;
//!
//! let result = EdaPipeline::new(config).run()?;
//! println!("{} charts written", result.chart_paths.len());
//! ```
//!
//! # Configuration
//!
//! Use [`EdaConfig`] to customize the run:
//!
//! ```rust,ignore
//! use media_eda::EdaConfig;
//!
//! let config = EdaConfig::builder()
//!     .preview_rows(5)          // rows shown in the preview section
//!     .top_n(10)                // entries kept in top-N charts
//!     .release_year_bins(30)    // histogram bin count
//!     .render_charts(false)     // console report only
//!     .build()?;
//! ```

pub mod charts;
pub mod config;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod pipeline;
pub mod prep;
pub mod profiler;
pub mod reporting;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use charts::ChartGenerator;
pub use config::{ConfigValidationError, EdaConfig, EdaConfigBuilder};
pub use error::{EdaError, Result, ResultExt};
pub use frequency::{compute_summary, exploded_value_counts, frequency_table, value_counts};
pub use loader::load_dataset;
pub use pipeline::EdaPipeline;
pub use prep::Preprocessor;
pub use profiler::{DataProfiler, statistics::summarize_column};
pub use reporting::ConsoleReporter;
pub use types::{
    ColumnProfile, ColumnSummary, EdaRunResult, FrequencyEntry, SummaryCounts, TableProfile,
};
