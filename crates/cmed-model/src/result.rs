//! Match result with its confidence metadata.

use serde::{Deserialize, Serialize};

use crate::catalog::RowIndex;

/// Result of matching one notice line against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Catalog rows with the best presentation score.
    pub catalog_indexes: Vec<RowIndex>,
    /// Representative name of the winning ingredient cluster.
    pub ingredient: String,
    /// Canonical form of the ingredient query that was compared.
    pub ingredient_query: String,
    /// Jaro-Winkler similarity between query and winning cluster, in `[0, 1]`.
    pub ingredient_score: f64,
    pub presentation_query: String,
    pub unit_query: String,
    /// Number of query token windows found in the best rows.
    pub presentation_score: usize,
    /// Rows in the winning cluster before presentation filtering.
    pub cluster_size: usize,
    /// Rows left after presentation filtering.
    pub matched_count: usize,
    /// `1 - matched_count / cluster_size`, or `0.0` for an empty cluster.
    pub reduction_ratio: f64,
    /// Barcodes of the matched rows.
    #[serde(default)]
    pub eans: Vec<String>,
    /// Product names of the matched rows.
    #[serde(default)]
    pub products: Vec<String>,
}

impl MatchResult {
    /// True when presentation filtering narrowed the cluster to one row.
    pub fn is_unique(&self) -> bool {
        self.matched_count == 1
    }
}

/// Share of the cluster removed by presentation filtering.
///
/// An empty cluster has nothing to reduce and reports `0.0`.
pub fn reduction_ratio(matched: usize, cluster_size: usize) -> f64 {
    if cluster_size == 0 {
        0.0
    } else {
        1.0 - matched as f64 / cluster_size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_ratio_bounds() {
        assert_eq!(reduction_ratio(0, 0), 0.0);
        assert_eq!(reduction_ratio(1, 2), 0.5);
        assert_eq!(reduction_ratio(4, 4), 0.0);
        assert!((reduction_ratio(1, 3) - 2.0 / 3.0).abs() < 1e-12);
    }
}
