//! Tests for cmed-model types.

use cmed_model::{
    Catalog, CatalogRow, GroupingTable, IngredientCluster, MatchResult, NoticeLine, NoticeMatch,
};

fn sample_result() -> MatchResult {
    MatchResult {
        catalog_indexes: vec![1],
        ingredient: "dipirona sodica".to_string(),
        ingredient_query: "dipirona".to_string(),
        ingredient_score: 0.91,
        presentation_query: "com".to_string(),
        unit_query: String::new(),
        presentation_score: 1,
        cluster_size: 2,
        matched_count: 1,
        reduction_ratio: 0.5,
        eans: vec!["7891234567890".to_string()],
        products: vec!["NOVALGINA".to_string()],
    }
}

fn sample_line() -> NoticeLine {
    NoticeLine {
        line: 3,
        original_description: "Dipirona 500mg comprimido".to_string(),
        ingredient: "dipirona".to_string(),
        presentation: "com".to_string(),
        unit: String::new(),
    }
}

#[test]
fn match_result_serializes() {
    let result = sample_result();
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: MatchResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
    assert!(round.is_unique());
}

#[test]
fn notice_match_copies_indexes_from_result() {
    let line = sample_line();
    let matched = NoticeMatch::matched(&line, sample_result());
    assert_eq!(matched.line, 3);
    assert_eq!(matched.catalog_indexes, vec![1]);
    assert!(matched.is_matched());

    let unmatched = NoticeMatch::unmatched(&line);
    assert!(unmatched.catalog_indexes.is_empty());
    assert!(!unmatched.is_matched());
    assert_eq!(unmatched.original_description, "Dipirona 500mg comprimido");
}

#[test]
fn grouping_table_lookups() {
    let table = GroupingTable::new(vec![
        IngredientCluster::new("dipirona sodica", vec![1, 2]),
        IngredientCluster::new("paracetamol", vec![0]),
    ]);
    assert_eq!(table.len(), 2);
    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.find("paracetamol").map(|c| c.indexes.clone()),
        Some(vec![0])
    );
    assert_eq!(
        table.cluster_of(2).map(|c| c.name.as_str()),
        Some("dipirona sodica")
    );
    assert!(table.cluster_of(9).is_none());
}

#[test]
fn catalog_lookup_by_index() {
    let catalog = Catalog::new(vec![
        CatalogRow::new(10, "dipirona sodica", "com 500 mg"),
        CatalogRow::new(20, "dipirona sodica", "sol or 10 ml"),
    ])
    .expect("build catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get(20).map(|row| row.presentation.as_str()),
        Some("sol or 10 ml")
    );
    assert!(catalog.get(0).is_none());
}
