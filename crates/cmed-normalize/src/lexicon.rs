//! Lookup tables injected into the normalizer.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::options::StopwordVariant;
use crate::tables::{
    ABBREVIATIONS, INGREDIENT_CORRECTIONS, INGREDIENT_STOPWORDS, PRESENTATION_STOPWORDS,
};

/// Corrections, stopwords and abbreviations used during normalization.
///
/// Built once and shared read-only by every normalization call.
#[derive(Debug, Clone)]
pub struct Lexicon {
    corrections: HashMap<String, String>,
    ingredient_stopwords: HashSet<String>,
    presentation_stopwords: HashSet<String>,
    abbreviations: HashMap<String, String>,
}

/// Additional lexicon entries, typically read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconEntries {
    pub corrections: BTreeMap<String, String>,
    pub ingredient_stopwords: Vec<String>,
    pub presentation_stopwords: Vec<String>,
    pub abbreviations: BTreeMap<String, String>,
}

impl LexiconEntries {
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
            && self.ingredient_stopwords.is_empty()
            && self.presentation_stopwords.is_empty()
            && self.abbreviations.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in tables for Brazilian drug descriptions.
    pub fn builtin() -> Self {
        Self {
            corrections: pairs(INGREDIENT_CORRECTIONS),
            ingredient_stopwords: words(INGREDIENT_STOPWORDS),
            presentation_stopwords: words(PRESENTATION_STOPWORDS),
            abbreviations: pairs(ABBREVIATIONS),
        }
    }

    /// A lexicon with no entries at all.
    pub fn empty() -> Self {
        Self {
            corrections: HashMap::new(),
            ingredient_stopwords: HashSet::new(),
            presentation_stopwords: HashSet::new(),
            abbreviations: HashMap::new(),
        }
    }

    /// Merge extra entries; later entries override existing mappings.
    #[must_use]
    pub fn extend(mut self, entries: &LexiconEntries) -> Self {
        self.corrections.extend(
            entries
                .corrections
                .iter()
                .map(|(from, to)| (from.clone(), to.clone())),
        );
        self.ingredient_stopwords
            .extend(entries.ingredient_stopwords.iter().cloned());
        self.presentation_stopwords
            .extend(entries.presentation_stopwords.iter().cloned());
        self.abbreviations.extend(
            entries
                .abbreviations
                .iter()
                .map(|(from, to)| (from.clone(), to.clone())),
        );
        self
    }

    pub fn correction(&self, token: &str) -> Option<&str> {
        self.corrections.get(token).map(String::as_str)
    }

    pub fn abbreviation(&self, token: &str) -> Option<&str> {
        self.abbreviations.get(token).map(String::as_str)
    }

    pub fn is_stopword(&self, variant: StopwordVariant, token: &str) -> bool {
        match variant {
            StopwordVariant::Ingredient => self.ingredient_stopwords.contains(token),
            StopwordVariant::Presentation => self.presentation_stopwords.contains(token),
        }
    }
}

fn pairs(table: &[(&str, &str)]) -> HashMap<String, String> {
    table
        .iter()
        .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
        .collect()
}

fn words(table: &[&str]) -> HashSet<String> {
    table.iter().map(|word| (*word).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_loaded() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.correction("diporina"), Some("dipirona"));
        assert_eq!(lexicon.abbreviation("comprimido"), Some("com"));
        assert!(lexicon.is_stopword(StopwordVariant::Ingredient, "cloridrato"));
        assert!(lexicon.is_stopword(StopwordVariant::Presentation, "embalagem"));
        assert!(!lexicon.is_stopword(StopwordVariant::Presentation, "cloridrato"));
    }

    #[test]
    fn extend_overrides_and_adds() {
        let entries = LexiconEntries {
            corrections: BTreeMap::from([("dipirna".to_string(), "dipirona".to_string())]),
            presentation_stopwords: vec!["unidade".to_string()],
            abbreviations: BTreeMap::from([("comprimido".to_string(), "comp".to_string())]),
            ..LexiconEntries::default()
        };
        let lexicon = Lexicon::builtin().extend(&entries);
        assert_eq!(lexicon.correction("dipirna"), Some("dipirona"));
        assert_eq!(lexicon.correction("diporina"), Some("dipirona"));
        assert_eq!(lexicon.abbreviation("comprimido"), Some("comp"));
        assert!(lexicon.is_stopword(StopwordVariant::Presentation, "unidade"));
    }

    #[test]
    fn empty_lexicon_has_no_entries() {
        let lexicon = Lexicon::empty();
        assert!(lexicon.correction("diporina").is_none());
        assert!(!lexicon.is_stopword(StopwordVariant::Ingredient, "de"));
    }
}
