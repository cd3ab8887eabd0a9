//! End-to-end pipeline: load, profile, preprocess, describe, chart,
//! summarize.

use crate::charts::ChartGenerator;
use crate::config::EdaConfig;
use crate::error::{EdaError, Result, ResultExt};
use crate::frequency::compute_summary;
use crate::loader::load_dataset;
use crate::prep::Preprocessor;
use crate::profiler::{DataProfiler, statistics::summarize_column};
use crate::reporting::ConsoleReporter;
use crate::types::{ColumnSummary, EdaRunResult};
use polars::prelude::*;
use std::time::Instant;
use tracing::info;

/// One-shot EDA run over a media catalog export.
///
/// Stage order is fixed: the structural report describes the file as it
/// arrived, then preprocessing adds the derived columns, and everything
/// downstream (statistics, charts, summary) sees the enriched table.
pub struct EdaPipeline {
    config: EdaConfig,
}

impl EdaPipeline {
    /// Create a pipeline. The configuration is validated on `run`.
    pub fn new(config: EdaConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline, printing the console report as it goes.
    pub fn run(&self) -> Result<EdaRunResult> {
        self.config.validate()?;
        let started = Instant::now();

        info!("Loading dataset from {}", self.config.input_path.display());
        let mut df = load_dataset(&self.config.input_path)?;
        if df.height() == 0 {
            return Err(EdaError::EmptyDataset);
        }

        info!("Profiling structure ({} rows, {} columns)", df.height(), df.width());
        let profile = DataProfiler::profile_dataset(&df)?;
        ConsoleReporter::print_structure(&df, &profile, self.config.preview_rows);

        info!("Preprocessing derived columns");
        Preprocessor::apply(&mut df).context("While preprocessing")?;

        info!("Computing descriptive statistics");
        let column_summaries = self.summarize_columns(&df)?;
        ConsoleReporter::print_describe(&column_summaries);

        let chart_paths = if self.config.render_charts {
            std::fs::create_dir_all(&self.config.output_dir)?;
            info!("Rendering charts into {}", self.config.output_dir.display());
            let generator = ChartGenerator::new(
                &self.config.output_dir,
                self.config.top_n,
                self.config.release_year_bins,
            );
            generator.render_all(&df)?
        } else {
            info!("Chart rendering disabled");
            Vec::new()
        };

        let summary = compute_summary(&df)?;
        ConsoleReporter::print_summary(&summary, &self.config.output_dir);

        let duration_ms = started.elapsed().as_millis() as u64;
        info!("Run finished in {} ms", duration_ms);

        Ok(EdaRunResult {
            profile,
            column_summaries,
            summary,
            chart_paths,
            duration_ms,
        })
    }

    fn summarize_columns(&self, df: &DataFrame) -> Result<Vec<ColumnSummary>> {
        df.get_columns()
            .iter()
            .map(|col| summarize_column(col.as_materialized_series()))
            .collect()
    }
}
