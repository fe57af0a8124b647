//! CMED price-list loading.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::table::{ColumnRef, normalize_header, read_delimited};

/// Column layout of a catalog export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    pub delimiter: char,
    /// Column holding the active ingredient, after renames.
    pub ingredient_column: String,
    /// Column holding the packaging description, after renames.
    pub presentation_column: String,
    /// Optional commercial product name column.
    pub product_column: String,
    /// Barcode columns, read when present.
    pub ean_columns: Vec<String>,
    /// Header renames applied before columns are looked up.
    pub renames: BTreeMap<String, String>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            ingredient_column: "principio_ativo".to_string(),
            presentation_column: "apresentacao".to_string(),
            product_column: "produto".to_string(),
            ean_columns: vec!["ean_1".to_string(), "ean_2".to_string(), "ean_3".to_string()],
            renames: BTreeMap::from([
                ("substancia".to_string(), "principio_ativo".to_string()),
                ("ean 1".to_string(), "ean_1".to_string()),
                ("ean 2".to_string(), "ean_2".to_string()),
                ("ean 3".to_string(), "ean_3".to_string()),
            ]),
        }
    }
}

impl CatalogOptions {
    /// Header cells that identify the header row, before renames.
    fn header_markers(&self) -> Vec<String> {
        let required = [
            normalize_header(&self.ingredient_column),
            normalize_header(&self.presentation_column),
        ];
        let mut markers = required.to_vec();
        for (from, to) in &self.renames {
            if required.contains(&normalize_header(to)) {
                markers.push(normalize_header(from));
            }
        }
        markers
    }
}

/// A catalog entry as read, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalogRow {
    /// 0-based data row position.
    pub index: usize,
    pub active_ingredient: String,
    pub presentation: String,
    pub product: Option<String>,
    pub eans: Vec<String>,
}

/// Load a catalog export.
pub fn load_catalog(path: &Path, options: &CatalogOptions) -> Result<Vec<RawCatalogRow>> {
    let mut table = read_delimited(path, options.delimiter, &options.header_markers())?;
    table.rename(&options.renames);
    debug!(path = %path.display(), headers = ?table.headers, "catalog headers");

    let ingredient = table.resolve(&ColumnRef::name(&options.ingredient_column), path)?;
    let presentation = table.resolve(&ColumnRef::name(&options.presentation_column), path)?;
    let product = table.position(&options.product_column);
    let eans: Vec<usize> = options
        .ean_columns
        .iter()
        .filter_map(|column| table.position(column))
        .collect();

    let rows: Vec<RawCatalogRow> = (0..table.rows.len())
        .map(|row| RawCatalogRow {
            index: row,
            active_ingredient: table.cell(row, ingredient).to_string(),
            presentation: table.cell(row, presentation).to_string(),
            product: product
                .map(|column| table.cell(row, column))
                .filter(|value| !value.is_empty())
                .map(str::to_string),
            eans: eans
                .iter()
                .map(|&column| table.cell(row, column))
                .filter(|value| !value.is_empty() && *value != "-")
                .map(str::to_string)
                .collect(),
        })
        .collect();
    info!(path = %path.display(), rows = rows.len(), "catalog loaded");
    Ok(rows)
}
