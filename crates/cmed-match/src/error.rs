//! Error types for matching operations.

use cmed_model::ModelError;
use thiserror::Error;

/// Errors from matching operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Classification attempted against a grouping table with no clusters.
    #[error("no ingredient clusters available")]
    EmptyGroupingTable,
    /// Grouping table refers to rows the catalog does not hold.
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, MatchError>;
