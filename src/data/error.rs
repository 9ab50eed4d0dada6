use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while turning a source file into records.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet '{sheet}' not found (available: {})", .available.join(", "))]
    MissingSheet {
        sheet: String,
        available: Vec<String>,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// `row` is 1-based and counts the header row, like a spreadsheet.
    #[error("row {row}, column '{column}': cannot interpret '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Arrow: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

pub type LoadResult<T> = Result<T, DataLoadError>;
