//! Integration tests for the normalizer.

use cmed_normalize::{Lexicon, LexiconEntries, NormalizeOptions, Normalizer, StopwordVariant};
use proptest::prelude::*;

#[test]
fn options_deserialize_from_toml() {
    let options: NormalizeOptions = toml::from_str(
        r#"
        correct_misspellings = true
        stopwords = "ingredient"
        "#,
    )
    .expect("parse options");
    assert!(options.correct_misspellings);
    assert_eq!(options.stopwords, Some(StopwordVariant::Ingredient));
    // Unset fields keep their defaults.
    assert!(options.abbreviate);
    assert!(!options.remove_numbers);
}

#[test]
fn custom_entries_take_part_in_normalization() {
    let entries: LexiconEntries = toml::from_str(
        r#"
        ingredient_stopwords = ["generico"]

        [corrections]
        paracetamolm = "paracetamol"
        "#,
    )
    .expect("parse entries");
    let normalizer = Normalizer::new(Lexicon::builtin().extend(&entries));
    assert_eq!(
        normalizer.normalize(
            "Paracetamolm Genérico 750mg",
            &NormalizeOptions::catalog_ingredient()
        ),
        "paracetamol mg"
    );
}

#[test]
fn catalog_and_notice_presentations_line_up() {
    let normalizer = Normalizer::default();
    let catalog = normalizer.normalize(
        "500 MG COM CT BL AL PLAS INC X 20",
        &NormalizeOptions::catalog_presentation(),
    );
    let notice = normalizer.normalize("comprimido", &NormalizeOptions::notice_description());
    assert_eq!(catalog, "500 mg com ct bl al plas inc x 20");
    assert_eq!(notice, "com");
}

proptest! {
    #[test]
    fn output_is_lowercase_ascii_words(raw in "[a-zA-Z0-9 áéíóúãõçÁÉÇ,.;/-]{0,40}") {
        let normalizer = Normalizer::default();
        let text = normalizer.normalize(&raw, &NormalizeOptions::notice_description());
        prop_assert!(!text.starts_with(' ') && !text.ends_with(' '));
        prop_assert!(!text.contains("  "));
        prop_assert!(text
            .chars()
            .all(|ch| ch == ' ' || ch == '_' || ch.is_ascii_lowercase() || ch.is_ascii_digit()));
    }

    #[test]
    fn deduped_output_has_unique_tokens(raw in "(dipirona|sodica|com|500|mg| ){0,30}") {
        let normalizer = Normalizer::default();
        let tokens = normalizer.tokens(&raw, &NormalizeOptions::notice_description());
        let mut unique = tokens.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), tokens.len());
    }
}
