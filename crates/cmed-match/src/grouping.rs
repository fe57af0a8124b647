//! Grouping of catalog rows into ingredient clusters.

use std::collections::HashMap;
use std::time::Instant;

use cmed_model::{CanonicalForm, Catalog, GroupingTable, IngredientCluster, RowIndex};
use tracing::{debug, info};

/// Group catalog rows by the canonical form of their active ingredient.
///
/// Spellings whose canonical forms collide ("sertralina cloridrato" and
/// "cloridrato sertralina") share one cluster represented by the spelling
/// seen first in catalog order. Clusters are ordered by representative.
pub fn build_grouping(catalog: &Catalog) -> GroupingTable {
    let start = Instant::now();

    // One entry per distinct spelling, in first-seen order.
    let mut spellings: Vec<(&str, Vec<RowIndex>)> = Vec::new();
    let mut spelling_slots: HashMap<&str, usize> = HashMap::new();
    for row in catalog.rows() {
        let name = row.active_ingredient.as_str();
        match spelling_slots.get(name) {
            Some(&slot) => spellings[slot].1.push(row.index),
            None => {
                spelling_slots.insert(name, spellings.len());
                spellings.push((name, vec![row.index]));
            }
        }
    }

    let mut merged: Vec<(&str, Vec<RowIndex>)> = Vec::new();
    let mut canonical_slots: HashMap<CanonicalForm, usize> = HashMap::new();
    let mut collisions = 0usize;
    for (name, indexes) in spellings {
        let canonical = CanonicalForm::of(name);
        match canonical_slots.get(&canonical) {
            Some(&slot) => {
                let (kept, kept_indexes) = &mut merged[slot];
                debug!(
                    canonical = %canonical,
                    kept = %kept,
                    merged = %name,
                    "merging ingredient spellings"
                );
                kept_indexes.extend(indexes);
                collisions += 1;
            }
            None => {
                canonical_slots.insert(canonical, merged.len());
                merged.push((name, indexes));
            }
        }
    }

    let mut clusters: Vec<IngredientCluster> = merged
        .into_iter()
        .map(|(name, indexes)| IngredientCluster::new(name, indexes))
        .collect();
    clusters.sort_by(|left, right| left.name.cmp(&right.name));

    info!(
        rows = catalog.len(),
        clusters = clusters.len(),
        collisions,
        duration_ms = start.elapsed().as_millis(),
        "grouping built"
    );
    GroupingTable::new(clusters)
}

#[cfg(test)]
mod tests {
    use cmed_model::CatalogRow;

    use super::*;

    fn catalog(rows: &[(RowIndex, &str)]) -> Catalog {
        Catalog::new(
            rows.iter()
                .map(|&(index, ingredient)| CatalogRow::new(index, ingredient, "com"))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn merged_cluster_keeps_first_seen_spelling() {
        let table = build_grouping(&catalog(&[
            (5, "sertralina cloridrato"),
            (1, "cloridrato sertralina"),
            (3, "sertralina cloridrato"),
        ]));
        assert_eq!(table.len(), 1);
        let cluster = &table.clusters()[0];
        assert_eq!(cluster.name, "sertralina cloridrato");
        assert_eq!(cluster.canonical.as_str(), "cloridrato sertralina");
        assert_eq!(cluster.indexes, vec![1, 3, 5]);
    }

    #[test]
    fn clusters_sorted_by_representative() {
        let table = build_grouping(&catalog(&[
            (0, "paracetamol"),
            (1, "dipirona sodica"),
            (2, "amoxicilina"),
        ]));
        let names: Vec<&str> = table.iter().map(|cluster| cluster.name.as_str()).collect();
        assert_eq!(names, vec!["amoxicilina", "dipirona sodica", "paracetamol"]);
    }

    #[test]
    fn empty_catalog_yields_empty_table() {
        let table = build_grouping(&Catalog::default());
        assert!(table.is_empty());
    }
}
