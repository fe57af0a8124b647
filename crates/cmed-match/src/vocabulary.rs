//! Catalog token vocabulary, used to split combined notice descriptions.

use std::collections::BTreeSet;

use cmed_model::Catalog;

/// Distinct ingredient and presentation tokens across a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogVocabulary {
    ingredient_tokens: BTreeSet<String>,
    presentation_tokens: BTreeSet<String>,
}

/// A notice description split into its ingredient and presentation parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionParts {
    pub ingredient: String,
    pub presentation: String,
}

impl CatalogVocabulary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut vocabulary = Self::default();
        for row in catalog.rows() {
            vocabulary
                .ingredient_tokens
                .extend(row.active_ingredient.split_whitespace().map(str::to_string));
            vocabulary
                .presentation_tokens
                .extend(row.presentation.split_whitespace().map(str::to_string));
        }
        vocabulary
    }

    pub fn is_ingredient_token(&self, token: &str) -> bool {
        self.ingredient_tokens.contains(token)
    }

    pub fn is_presentation_token(&self, token: &str) -> bool {
        self.presentation_tokens.contains(token)
    }

    pub fn ingredient_len(&self) -> usize {
        self.ingredient_tokens.len()
    }

    pub fn presentation_len(&self) -> usize {
        self.presentation_tokens.len()
    }

    /// Route each token of a normalized description to the ingredient part,
    /// the presentation part, both, or neither, keeping token order.
    pub fn split_description(&self, description: &str) -> DescriptionParts {
        let mut ingredient = Vec::new();
        let mut presentation = Vec::new();
        for token in description.split_whitespace() {
            if self.is_ingredient_token(token) {
                ingredient.push(token);
            }
            if self.is_presentation_token(token) {
                presentation.push(token);
            }
        }
        DescriptionParts {
            ingredient: ingredient.join(" "),
            presentation: presentation.join(" "),
        }
    }
}
