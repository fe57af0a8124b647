//! Matching of procurement notice lines against the CMED catalog.
//!
//! Matching runs in two stages. The ingredient query is classified into the
//! most similar ingredient cluster, then the rows of that cluster are scored
//! by how many presentation and unit token windows they contain.

pub mod classify;
pub mod engine;
pub mod error;
pub mod grouping;
pub mod presentation;
pub mod vocabulary;
pub mod windows;

pub use classify::{IngredientMatch, classify_ingredient, similarity};
pub use engine::{MatchEngine, match_notice};
pub use error::{MatchError, Result};
pub use grouping::build_grouping;
pub use presentation::{PresentationMatch, match_presentation};
pub use vocabulary::{CatalogVocabulary, DescriptionParts};
pub use windows::{token_windows, window_count};
