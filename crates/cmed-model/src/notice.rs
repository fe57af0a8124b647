//! Procurement notice lines and their match outcome.

use serde::{Deserialize, Serialize};

use crate::catalog::RowIndex;
use crate::result::MatchResult;

/// One item of a public procurement notice, with normalized query fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeLine {
    /// 0-based position in the source notice.
    pub line: usize,
    /// Free-text description as read, without line breaks.
    pub original_description: String,
    /// Normalized ingredient query.
    pub ingredient: String,
    /// Normalized presentation query.
    pub presentation: String,
    /// Normalized unit-of-measure query.
    pub unit: String,
}

/// Outcome of matching one notice line.
///
/// `result` is `None` when the line could not be classified, in which case
/// `catalog_indexes` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoticeMatch {
    pub line: usize,
    pub original_description: String,
    pub catalog_indexes: Vec<RowIndex>,
    pub result: Option<MatchResult>,
}

impl NoticeMatch {
    pub fn matched(line: &NoticeLine, result: MatchResult) -> Self {
        Self {
            line: line.line,
            original_description: line.original_description.clone(),
            catalog_indexes: result.catalog_indexes.clone(),
            result: Some(result),
        }
    }

    pub fn unmatched(line: &NoticeLine) -> Self {
        Self {
            line: line.line,
            original_description: line.original_description.clone(),
            catalog_indexes: Vec::new(),
            result: None,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.result.is_some()
    }
}
