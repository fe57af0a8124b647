//! Narrowing an ingredient cluster down by presentation text.

use std::cmp::Ordering;

use cmed_model::{CatalogRow, RowIndex, reduction_ratio};
use tracing::{debug, warn};

use crate::windows::token_windows;

/// Rows of a cluster that best match a presentation query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationMatch {
    /// Indexes of every row reaching `score`, in cluster order.
    pub indexes: Vec<RowIndex>,
    /// Number of query windows found in each best row.
    pub score: usize,
    /// Rows considered.
    pub cluster_size: usize,
}

impl PresentationMatch {
    /// `1 - matched / cluster_size`, `0.0` when no rows were considered.
    pub fn reduction_ratio(&self) -> f64 {
        reduction_ratio(self.indexes.len(), self.cluster_size)
    }
}

/// Score `rows` against the token windows of `presentation` and `unit`.
///
/// A one-token window scores when the token occurs anywhere in the row. A
/// longer window scores only when it follows the first occurrence of its
/// first token; later occurrences are not tried. A strictly higher score
/// replaces the best rows and an equal score joins them, so rows are kept
/// even when nothing scores at all.
pub fn match_presentation(
    rows: &[&CatalogRow],
    presentation: &str,
    unit: &str,
) -> PresentationMatch {
    let presentation_tokens: Vec<&str> = presentation.split_whitespace().collect();
    let unit_tokens: Vec<&str> = unit.split_whitespace().collect();
    let mut windows = token_windows(&presentation_tokens);
    windows.extend(token_windows(&unit_tokens));

    if rows.is_empty() {
        warn!(presentation, unit, "no catalog rows to match presentation against");
    }

    let mut best_score = 0usize;
    let mut best: Vec<RowIndex> = Vec::new();
    for row in rows {
        let row_tokens: Vec<&str> = row.presentation.split_whitespace().collect();
        let score = windows
            .iter()
            .filter(|window| window_occurs(window, &row_tokens))
            .count();
        match score.cmp(&best_score) {
            Ordering::Greater => {
                best_score = score;
                best = vec![row.index];
            }
            Ordering::Equal => best.push(row.index),
            Ordering::Less => {}
        }
    }

    debug!(
        windows = windows.len(),
        cluster_size = rows.len(),
        matched = best.len(),
        score = best_score,
        "presentation matched"
    );
    PresentationMatch {
        indexes: best,
        score: best_score,
        cluster_size: rows.len(),
    }
}

fn window_occurs(window: &[&str], tokens: &[&str]) -> bool {
    match window {
        [] => false,
        [token] => tokens.contains(token),
        [first, rest @ ..] => {
            let Some(anchor) = tokens.iter().position(|token| token == first) else {
                return false;
            };
            let start = anchor + 1;
            tokens
                .get(start..start + rest.len())
                .is_some_and(|run| run == rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token_is_membership() {
        assert!(window_occurs(&["amp"], &["sol", "inj", "amp"]));
        assert!(!window_occurs(&["fr"], &["sol", "inj", "amp"]));
    }

    #[test]
    fn runs_are_anchored_at_first_occurrence() {
        let tokens = ["com", "x", "com", "rev"];
        assert!(window_occurs(&["com", "x"], &tokens));
        assert!(!window_occurs(&["com", "rev"], &tokens));
        assert!(window_occurs(&["x", "com", "rev"], &tokens));
    }

    #[test]
    fn runs_past_the_end_do_not_match() {
        assert!(!window_occurs(&["ct", "bl", "al"], &["com", "ct", "bl"]));
    }

    #[test]
    fn empty_rows_give_empty_match() {
        let matched = match_presentation(&[], "com", "cx");
        assert!(matched.indexes.is_empty());
        assert_eq!(matched.score, 0);
        assert_eq!(matched.cluster_size, 0);
        assert_eq!(matched.reduction_ratio(), 0.0);
    }
}
