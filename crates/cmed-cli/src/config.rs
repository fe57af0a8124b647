//! Optional TOML configuration for the `cmed` binary.
//!
//! ```toml
//! split_description = true
//!
//! [catalog]
//! delimiter = ";"
//!
//! [notice]
//! description_column = "descricao"
//! unit_column = 4
//!
//! [lexicon.corrections]
//! "dipirna" = "dipirona"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cmed_ingest::{CatalogOptions, NoticeOptions};
use cmed_normalize::{Lexicon, LexiconEntries, Normalizer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogOptions,
    pub notice: NoticeOptions,
    /// Entries merged into the built-in lexicon.
    pub lexicon: LexiconEntries,
    /// Derive ingredient and presentation from the description when the
    /// notice has no ingredient column.
    pub split_description: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogOptions::default(),
            notice: NoticeOptions::default(),
            lexicon: LexiconEntries::default(),
            split_description: true,
        }
    }
}

impl AppConfig {
    /// Read a configuration file; missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Normalizer over the built-in lexicon plus configured entries.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(Lexicon::builtin().extend(&self.lexicon))
    }
}

#[cfg(test)]
mod tests {
    use cmed_ingest::ColumnRef;
    use cmed_normalize::NormalizeOptions;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::parse(
            r#"
split_description = false

[catalog]
delimiter = ","

[notice]
unit_column = 4
ingredient_column = "Princípio Ativo"

[lexicon.corrections]
"dipirna" = "dipirona"
"#,
        )
        .unwrap();

        assert!(!config.split_description);
        assert_eq!(config.catalog.delimiter, ',');
        assert_eq!(config.catalog.ingredient_column, "principio_ativo");
        assert_eq!(config.notice.unit_column, ColumnRef::Position(4));
        assert_eq!(config.notice.description_column, ColumnRef::name("descricao"));
        assert_eq!(
            config.notice.ingredient_column,
            Some(ColumnRef::Name("Princípio Ativo".to_string()))
        );
        assert_eq!(
            config
                .normalizer()
                .normalize("Dipirna", &NormalizeOptions::notice_description()),
            "dipirona"
        );
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(AppConfig::parse("split_description = \"yes\"").is_err());
    }
}
