//! Error types for catalog and notice ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited content.
    #[error("failed to parse {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Delimiter must be a single ASCII character.
    #[error("invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(char),

    /// File holds no non-blank rows.
    #[error("file is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Required column not found in the header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Positional column reference past the last header.
    #[error("column position {position} out of range in {path} ({width} columns)")]
    ColumnOutOfRange {
        position: usize,
        width: usize,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
