//! The normalization pipeline.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use unidecode::unidecode;

use crate::lexicon::Lexicon;
use crate::options::NormalizeOptions;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:http|www)\S+").expect("Invalid URL regex"));

static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W").expect("Invalid non-word regex"));

/// Turns raw descriptions into space-separated token strings.
///
/// Steps run in this order, each gated by [`NormalizeOptions`]: lowercase,
/// strip diacritics, strip URLs, strip non-word characters, tokenize,
/// correct misspellings, split digit runs, remove numbers, remove stopwords,
/// abbreviate, dedupe tokens.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    lexicon: Lexicon,
}

impl Normalizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalize `raw` and join the resulting tokens with single spaces.
    pub fn normalize(&self, raw: &str, options: &NormalizeOptions) -> String {
        self.tokens(raw, options).join(" ")
    }

    /// Normalize `raw` into its token sequence.
    pub fn tokens(&self, raw: &str, options: &NormalizeOptions) -> Vec<String> {
        let mut text = if options.lowercase {
            raw.to_lowercase()
        } else {
            raw.to_string()
        };
        if options.strip_diacritics {
            text = unidecode(&text);
        }
        if options.strip_urls {
            text = URL_REGEX.replace_all(&text, " ").into_owned();
        }
        if options.strip_non_word {
            text = NON_WORD_REGEX.replace_all(&text, " ").into_owned();
        }

        let mut tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();

        if options.correct_misspellings {
            for token in &mut tokens {
                if let Some(corrected) = self.lexicon.correction(token) {
                    *token = corrected.to_string();
                }
            }
        }
        if options.split_digits {
            tokens = tokens
                .iter()
                .flat_map(|token| split_digit_runs(token))
                .collect();
        }
        if options.remove_numbers {
            tokens = tokens
                .iter()
                .flat_map(|token| {
                    token
                        .split(|ch: char| ch.is_ascii_digit())
                        .filter(|part| !part.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect();
        }
        if let Some(variant) = options.stopwords {
            tokens.retain(|token| !self.lexicon.is_stopword(variant, token));
        }
        if options.abbreviate {
            for token in &mut tokens {
                if let Some(short) = self.lexicon.abbreviation(token) {
                    *token = short.to_string();
                }
            }
        }
        if options.dedupe_tokens {
            let mut seen = HashSet::new();
            tokens.retain(|token| seen.insert(token.clone()));
        }
        tokens
    }
}

/// Split a token at every boundary between digits and non-digits.
fn split_digit_runs(token: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_is_digit = None;
    for ch in token.chars() {
        let is_digit = ch.is_ascii_digit();
        if current_is_digit.is_some_and(|previous| previous != is_digit) {
            parts.push(std::mem::take(&mut current));
        }
        current.push(ch);
        current_is_digit = Some(is_digit);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::StopwordVariant;

    fn normalize(raw: &str, options: &NormalizeOptions) -> String {
        Normalizer::default().normalize(raw, options)
    }

    #[test]
    fn notice_description_preset() {
        assert_eq!(
            normalize(
                "Dipirona Sódica 500mg Comprimido",
                &NormalizeOptions::notice_description()
            ),
            "dipirona sodica 500 mg com"
        );
    }

    #[test]
    fn catalog_ingredient_drops_salts_and_numbers() {
        let options = NormalizeOptions::catalog_ingredient();
        assert_eq!(normalize("CLORIDRATO DE SERTRALINA", &options), "sertralina");
        assert_eq!(normalize("DIPORINA SÓDICA 1G", &options), "dipirona");
    }

    #[test]
    fn presentation_words_are_abbreviated() {
        let options = NormalizeOptions::notice_unit();
        assert_eq!(normalize("FRASCO-AMPOLA", &options), "fr amp");
        assert_eq!(
            normalize("SOLUÇÃO DE ÁGUA PARA INJEÇÃO", &options),
            "sol injecao"
        );
    }

    #[test]
    fn urls_are_removed() {
        let options = NormalizeOptions::default();
        assert_eq!(
            normalize("ver http://example.com/bula dipirona", &options),
            "ver dipirona"
        );
        assert_eq!(normalize("www.anvisa.gov.br dipirona", &options), "dipirona");
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let options = NormalizeOptions {
            dedupe_tokens: true,
            ..NormalizeOptions::default()
        };
        assert_eq!(
            normalize("dipirona dipirona sodica dipirona", &options),
            "dipirona sodica"
        );
    }

    #[test]
    fn digit_runs_split_from_letters() {
        assert_eq!(split_digit_runs("500mg"), vec!["500", "mg"]);
        assert_eq!(split_digit_runs("b12x3"), vec!["b", "12", "x", "3"]);
        assert_eq!(split_digit_runs("com"), vec!["com"]);
        assert!(split_digit_runs("").is_empty());
    }

    #[test]
    fn remove_numbers_without_splitting() {
        let options = NormalizeOptions {
            split_digits: false,
            remove_numbers: true,
            ..NormalizeOptions::default()
        };
        assert_eq!(normalize("500mg 20", &options), "mg");
    }

    #[test]
    fn disabled_steps_leave_text_alone() {
        let options = NormalizeOptions {
            abbreviate: false,
            ..NormalizeOptions::default()
        }
        .with_stopwords(Some(StopwordVariant::Presentation));
        assert_eq!(normalize("Comprimido de 10", &options), "comprimido 10");
    }
}
