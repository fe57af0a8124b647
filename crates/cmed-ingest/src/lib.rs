//! Loading of CMED catalog exports and procurement notice tables.
//!
//! Tables are read as text with normalized headers. Normalization of the
//! cell contents is left to `cmed-normalize`.

pub mod catalog;
pub mod error;
pub mod notice;
pub mod table;

pub use catalog::{CatalogOptions, RawCatalogRow, load_catalog};
pub use error::{IngestError, Result};
pub use notice::{NoticeOptions, RawNoticeLine, load_notice};
pub use table::{ColumnRef, DelimitedTable, normalize_header, read_delimited};
