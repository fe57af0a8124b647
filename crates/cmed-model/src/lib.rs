//! Data model shared by the CMED matching crates.
//!
//! The catalog is loaded once and treated as read-only; grouping tables and
//! match results are derived values that never mutate it.

pub mod catalog;
pub mod cluster;
pub mod error;
pub mod notice;
pub mod result;

pub use catalog::{Catalog, CatalogRow, RowIndex};
pub use cluster::{CanonicalForm, GroupingTable, IngredientCluster};
pub use error::{ModelError, Result};
pub use notice::{NoticeLine, NoticeMatch};
pub use result::{MatchResult, reduction_ratio};
