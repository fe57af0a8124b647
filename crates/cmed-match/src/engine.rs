//! Composition of classification and presentation matching.

use std::time::Instant;

use cmed_model::{Catalog, GroupingTable, MatchResult, NoticeLine, NoticeMatch};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, info, warn};

use crate::classify::classify_ingredient;
use crate::error::{MatchError, Result};
use crate::presentation::match_presentation;

/// Classify the ingredient, restrict the catalog to the winning cluster and
/// narrow it down by presentation and unit text.
///
/// Pure function of its inputs: the same catalog, grouping and queries
/// always give the same result.
pub fn match_notice(
    catalog: &Catalog,
    grouping: &GroupingTable,
    ingredient: &str,
    presentation: &str,
    unit: &str,
) -> Result<MatchResult> {
    let ingredient_match = classify_ingredient(ingredient, grouping)?;
    let rows = catalog.select(&ingredient_match.cluster.indexes)?;
    let presentation_match = match_presentation(&rows, presentation, unit);
    let reduction_ratio = presentation_match.reduction_ratio();
    let eans = catalog.eans_of(&presentation_match.indexes);
    let products = catalog.products_of(&presentation_match.indexes);
    Ok(MatchResult {
        matched_count: presentation_match.indexes.len(),
        catalog_indexes: presentation_match.indexes,
        ingredient: ingredient_match.cluster.name.clone(),
        ingredient_query: ingredient_match.query.as_str().to_string(),
        ingredient_score: ingredient_match.score,
        presentation_query: presentation.to_string(),
        unit_query: unit.to_string(),
        presentation_score: presentation_match.score,
        cluster_size: presentation_match.cluster_size,
        reduction_ratio,
        eans,
        products,
    })
}

/// Matches notice lines against a shared, read-only catalog and grouping.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    catalog: &'a Catalog,
    grouping: &'a GroupingTable,
}

impl<'a> MatchEngine<'a> {
    pub fn new(catalog: &'a Catalog, grouping: &'a GroupingTable) -> Self {
        Self { catalog, grouping }
    }

    /// Match one line. An empty grouping table leaves the line unmatched.
    pub fn match_line(&self, line: &NoticeLine) -> Result<NoticeMatch> {
        match match_notice(
            self.catalog,
            self.grouping,
            &line.ingredient,
            &line.presentation,
            &line.unit,
        ) {
            Ok(result) => {
                debug!(
                    line = line.line,
                    ingredient = %result.ingredient,
                    candidates = result.matched_count,
                    "line matched"
                );
                Ok(NoticeMatch::matched(line, result))
            }
            Err(MatchError::EmptyGroupingTable) => {
                warn!(line = line.line, "no ingredient clusters, line left unmatched");
                Ok(NoticeMatch::unmatched(line))
            }
            Err(error) => Err(error),
        }
    }

    /// Match lines in parallel; results keep input order.
    pub fn match_batch(&self, lines: &[NoticeLine]) -> Result<Vec<NoticeMatch>> {
        self.match_batch_with(lines, |_| {})
    }

    /// Like [`match_batch`](Self::match_batch), calling `inspect` as each line
    /// completes (in completion order).
    pub fn match_batch_with<F>(&self, lines: &[NoticeLine], inspect: F) -> Result<Vec<NoticeMatch>>
    where
        F: Fn(&NoticeMatch) + Sync,
    {
        let start = Instant::now();
        let matches = lines
            .par_iter()
            .map(|line| {
                let matched = self.match_line(line)?;
                inspect(&matched);
                Ok(matched)
            })
            .collect::<Result<Vec<_>>>()?;
        info!(
            lines = matches.len(),
            matched = matches.iter().filter(|m| m.is_matched()).count(),
            duration_ms = start.elapsed().as_millis(),
            "batch matched"
        );
        Ok(matches)
    }
}
