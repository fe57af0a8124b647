use std::path::PathBuf;

use cmed_model::{GroupingTable, NoticeMatch};
use serde::Serialize;

#[derive(Debug)]
pub struct GroupResult {
    pub catalog: PathBuf,
    pub rows: usize,
    pub grouping: GroupingTable,
}

#[derive(Debug)]
pub struct ClassifyResult {
    /// Normalized query text.
    pub query: String,
    /// Canonical form that was compared.
    pub canonical: String,
    pub ingredient: String,
    pub score: f64,
    /// Catalog rows in the winning cluster.
    pub cluster_size: usize,
}

#[derive(Debug, Serialize)]
pub struct MatchRun {
    pub catalog: PathBuf,
    pub notice: PathBuf,
    pub catalog_rows: usize,
    pub clusters: usize,
    pub matches: Vec<NoticeMatch>,
}

impl MatchRun {
    pub fn matched_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_matched()).count()
    }

    pub fn unique_count(&self) -> usize {
        self.matches
            .iter()
            .filter_map(|m| m.result.as_ref())
            .filter(|result| result.is_unique())
            .count()
    }
}
