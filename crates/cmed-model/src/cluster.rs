//! Canonical forms and ingredient clusters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::RowIndex;

/// Alphabetically token-sorted rendering of a text.
///
/// Two texts with the same multiset of whitespace-separated tokens share a
/// canonical form. It is a comparison key and is not meant for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalForm(String);

impl CanonicalForm {
    pub fn of(text: &str) -> Self {
        let mut tokens: Vec<&str> = text.split_whitespace().collect();
        tokens.sort_unstable();
        Self(tokens.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog rows sharing one canonical ingredient form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCluster {
    /// Representative spelling (first seen in catalog order).
    pub name: String,
    pub canonical: CanonicalForm,
    /// Unique row indexes, ascending.
    pub indexes: Vec<RowIndex>,
}

impl IngredientCluster {
    pub fn new(name: impl Into<String>, indexes: Vec<RowIndex>) -> Self {
        let name = name.into();
        let canonical = CanonicalForm::of(&name);
        let mut indexes = indexes;
        indexes.sort_unstable();
        indexes.dedup();
        Self {
            name,
            canonical,
            indexes,
        }
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

/// Read-only lookup table of ingredient clusters.
///
/// Iteration order is significant: the ingredient classifier breaks score
/// ties in favour of the cluster iterated last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupingTable {
    clusters: Vec<IngredientCluster>,
}

impl GroupingTable {
    /// Wrap clusters in the given iteration order.
    pub fn new(clusters: Vec<IngredientCluster>) -> Self {
        Self { clusters }
    }

    pub fn clusters(&self) -> &[IngredientCluster] {
        &self.clusters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IngredientCluster> {
        self.clusters.iter()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Cluster whose representative spelling is `name`.
    pub fn find(&self, name: &str) -> Option<&IngredientCluster> {
        self.clusters.iter().find(|cluster| cluster.name == name)
    }

    /// Cluster containing the given catalog row.
    pub fn cluster_of(&self, index: RowIndex) -> Option<&IngredientCluster> {
        self.clusters
            .iter()
            .find(|cluster| cluster.indexes.binary_search(&index).is_ok())
    }

    /// Total number of row indexes across clusters.
    pub fn row_count(&self) -> usize {
        self.clusters.iter().map(IngredientCluster::len).sum()
    }
}

impl<'a> IntoIterator for &'a GroupingTable {
    type Item = &'a IngredientCluster;
    type IntoIter = std::slice::Iter<'a, IngredientCluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_sorts_tokens() {
        assert_eq!(
            CanonicalForm::of("sertralina cloridrato").as_str(),
            "cloridrato sertralina"
        );
        assert_eq!(
            CanonicalForm::of("  cloridrato   sertralina "),
            CanonicalForm::of("sertralina cloridrato")
        );
    }

    #[test]
    fn canonical_form_of_empty_text_is_empty() {
        assert!(CanonicalForm::of("").is_empty());
        assert!(CanonicalForm::of("   ").is_empty());
    }

    #[test]
    fn cluster_indexes_are_sorted_and_unique() {
        let cluster = IngredientCluster::new("dipirona", vec![4, 1, 4, 2]);
        assert_eq!(cluster.indexes, vec![1, 2, 4]);
        assert_eq!(cluster.len(), 3);
    }
}
