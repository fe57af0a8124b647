use thiserror::Error;

use crate::catalog::RowIndex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("duplicate catalog row index: {0}")]
    DuplicateRowIndex(RowIndex),
    #[error("catalog row index not found: {0}")]
    UnknownRowIndex(RowIndex),
}

pub type Result<T> = std::result::Result<T, ModelError>;
