//! Procurement notice loading.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::table::{ColumnRef, read_delimited};

/// Column layout of a notice table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeOptions {
    pub delimiter: char,
    /// Free-text item description.
    pub description_column: ColumnRef,
    /// Unit of measure.
    pub unit_column: ColumnRef,
    /// Dedicated ingredient column; when absent the ingredient is taken
    /// from the description.
    pub ingredient_column: Option<ColumnRef>,
}

impl Default for NoticeOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            description_column: ColumnRef::name("descricao"),
            unit_column: ColumnRef::name("unidade"),
            ingredient_column: None,
        }
    }
}

/// A notice item as read, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNoticeLine {
    /// 0-based data row position.
    pub line: usize,
    /// Description with line breaks removed.
    pub original_description: String,
    pub description: String,
    pub unit: String,
    pub ingredient: Option<String>,
}

/// Load a notice table. The first non-blank row is the header.
pub fn load_notice(path: &Path, options: &NoticeOptions) -> Result<Vec<RawNoticeLine>> {
    let table = read_delimited(path, options.delimiter, &[])?;
    let description = table.resolve(&options.description_column, path)?;
    let unit = table.resolve(&options.unit_column, path)?;
    let ingredient = options
        .ingredient_column
        .as_ref()
        .map(|column| table.resolve(column, path))
        .transpose()?;

    let lines: Vec<RawNoticeLine> = (0..table.rows.len())
        .map(|row| {
            let text = table.cell(row, description);
            RawNoticeLine {
                line: row,
                original_description: text.replace(['\n', '\r'], ""),
                description: text.to_string(),
                unit: table.cell(row, unit).to_string(),
                ingredient: ingredient.map(|column| table.cell(row, column).to_string()),
            }
        })
        .collect();
    info!(path = %path.display(), lines = lines.len(), "notice loaded");
    Ok(lines)
}
