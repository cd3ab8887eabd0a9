//! Custom error types for the EDA pipeline.
//!
//! This module provides the error hierarchy using `thiserror`. Fatal
//! conditions (unreadable input, unwritable charts) surface here;
//! per-value parse failures never do — those degrade to nulls in the
//! preprocessing stage instead.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the EDA pipeline.
#[derive(Error, Debug)]
pub enum EdaError {
    /// The input dataset could not be read or parsed.
    #[error("Cannot access dataset at '{path}': {reason}")]
    DataAccess { path: PathBuf, reason: String },

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// The dataset contains no rows.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// A chart could not be rendered or saved.
    #[error("Failed to render chart '{chart}': {reason}")]
    ChartRender { chart: String, reason: String },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] crate::config::ConfigValidationError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<EdaError>,
    },
}

impl EdaError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        EdaError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for scripting against the CLI.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DataAccess { .. } => "DATA_ACCESS",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::EmptyDataset => "EMPTY_DATASET",
            Self::ChartRender { .. } => "CHART_RENDER",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error means the input file itself was unusable.
    pub fn is_data_access(&self) -> bool {
        match self {
            Self::DataAccess { .. } => true,
            Self::WithContext { source, .. } => source.is_data_access(),
            _ => false,
        }
    }
}

/// Result type alias for EDA operations.
pub type Result<T> = std::result::Result<T, EdaError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EdaError::Polars(e).with_context(context))
    }
}
