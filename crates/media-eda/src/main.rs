//! CLI entry point for the media catalog EDA pipeline.

use anyhow::Result;
use clap::Parser;
use media_eda::{EdaConfig, EdaPipeline};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory data analysis for media catalog exports",
    long_about = "Runs a one-shot exploratory analysis over a comma-delimited media\n\
                  catalog export: structural report, descriptive statistics, and a\n\
                  fixed sequence of chart images.\n\n\
                  EXAMPLES:\n  \
                  # Analyze the default dataset in the working directory\n  \
                  media-eda\n\n  \
                  # Custom input and output locations\n  \
                  media-eda -i titles.csv -o out/charts\n\n  \
                  # Console report only\n  \
                  media-eda -i titles.csv --no-charts"
)]
struct Args {
    /// Path to the CSV file to analyze
    #[arg(short, long, default_value = "netflix_titles.csv")]
    input: String,

    /// Output directory for chart images
    #[arg(short, long, default_value = "plots")]
    output: String,

    /// Number of entries kept in top-N frequency charts
    #[arg(long, default_value = "10")]
    top_n: usize,

    /// Bin count for the release-year histogram
    #[arg(long, default_value = "30")]
    bins: usize,

    /// Number of rows shown in the dataset preview
    #[arg(long, default_value = "5")]
    preview_rows: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Skip chart rendering (console report only)
    #[arg(long)]
    no_charts: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet);

    let config = EdaConfig::builder()
        .input_path(&args.input)
        .output_dir(&args.output)
        .top_n(args.top_n)
        .release_year_bins(args.bins)
        .preview_rows(args.preview_rows)
        .render_charts(!args.no_charts)
        .build()?;

    let result = EdaPipeline::new(config).run()?;

    info!(
        "Analyzed {} titles in {} ms",
        result.summary.total_titles, result.duration_ms
    );

    Ok(())
}
