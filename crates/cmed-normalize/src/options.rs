//! Option sets for the text normalizer.

use serde::{Deserialize, Serialize};

/// Which stopword table to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordVariant {
    /// Salts, hydrates and connectives that hide the active ingredient.
    Ingredient,
    /// Packaging filler words.
    Presentation,
}

/// Steps to run when normalizing a text.
///
/// Steps always run in a fixed order; the flags only switch them on or off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub lowercase: bool,
    /// Transliterate to ASCII, dropping accents.
    pub strip_diacritics: bool,
    /// Remove `http…` and `www…` runs.
    pub strip_urls: bool,
    /// Replace every non-word character with a space.
    pub strip_non_word: bool,
    /// Apply the misspelling correction table.
    pub correct_misspellings: bool,
    /// Split digit runs from adjacent letters (`500mg` becomes `500 mg`).
    pub split_digits: bool,
    /// Drop digits entirely.
    pub remove_numbers: bool,
    pub stopwords: Option<StopwordVariant>,
    /// Apply the abbreviation table.
    pub abbreviate: bool,
    /// Keep only the first occurrence of each token.
    pub dedupe_tokens: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_diacritics: true,
            strip_urls: true,
            strip_non_word: true,
            correct_misspellings: false,
            split_digits: true,
            remove_numbers: false,
            stopwords: None,
            abbreviate: true,
            dedupe_tokens: false,
        }
    }
}

impl NormalizeOptions {
    /// Catalog `principio_ativo` column.
    pub fn catalog_ingredient() -> Self {
        Self {
            correct_misspellings: true,
            remove_numbers: true,
            stopwords: Some(StopwordVariant::Ingredient),
            dedupe_tokens: true,
            ..Self::default()
        }
    }

    /// Catalog `apresentacao` column.
    pub fn catalog_presentation() -> Self {
        Self {
            stopwords: Some(StopwordVariant::Presentation),
            ..Self::default()
        }
    }

    /// Free-text description of a notice line.
    pub fn notice_description() -> Self {
        Self {
            correct_misspellings: true,
            dedupe_tokens: true,
            ..Self::default()
        }
    }

    /// Unit-of-measure column of a notice line.
    pub fn notice_unit() -> Self {
        Self::catalog_presentation()
    }

    #[must_use]
    pub fn with_stopwords(mut self, variant: Option<StopwordVariant>) -> Self {
        self.stopwords = variant;
        self
    }
}
