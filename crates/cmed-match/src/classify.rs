//! Ingredient classification by Jaro-Winkler similarity.

use cmed_model::{CanonicalForm, GroupingTable, IngredientCluster};
use rapidfuzz::distance::jaro_winkler;
use tracing::debug;

use crate::error::{MatchError, Result};

/// Winning cluster for an ingredient query.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientMatch<'a> {
    pub cluster: &'a IngredientCluster,
    /// Canonical form of the query as compared.
    pub query: CanonicalForm,
    /// Similarity in `[0, 1]`; 1 means identical canonical forms.
    pub score: f64,
}

impl IngredientMatch<'_> {
    /// Representative ingredient name of the winning cluster.
    pub fn name(&self) -> &str {
        &self.cluster.name
    }
}

/// Similarity between two canonical forms.
pub fn similarity(left: &CanonicalForm, right: &CanonicalForm) -> f64 {
    jaro_winkler::similarity(left.as_str().chars(), right.as_str().chars())
}

/// Find the cluster whose canonical form is most similar to the query's.
///
/// A score greater than or equal to the best so far replaces it, so on a
/// tie the cluster iterated last wins.
pub fn classify_ingredient<'a>(
    query: &str,
    table: &'a GroupingTable,
) -> Result<IngredientMatch<'a>> {
    let canonical = CanonicalForm::of(query);
    let mut best: Option<(&IngredientCluster, f64)> = None;
    for cluster in table {
        let score = similarity(&canonical, &cluster.canonical);
        if best.is_none_or(|(_, best_score)| score >= best_score) {
            best = Some((cluster, score));
        }
    }
    let (cluster, score) = best.ok_or(MatchError::EmptyGroupingTable)?;
    debug!(query = %canonical, ingredient = %cluster.name, score, "ingredient classified");
    Ok(IngredientMatch {
        cluster,
        query: canonical,
        score,
    })
}
