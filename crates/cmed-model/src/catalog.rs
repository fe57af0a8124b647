//! Catalog rows and the read-only catalog collection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Identifier of a catalog row, unique within a catalog.
pub type RowIndex = usize;

/// A single catalog entry with already-normalized text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub index: RowIndex,
    /// Normalized active-ingredient name.
    pub active_ingredient: String,
    /// Normalized packaging/form description.
    pub presentation: String,
    /// Commercial product name, as exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    /// Barcodes of the packaging.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub eans: Vec<String>,
}

impl CatalogRow {
    pub fn new(
        index: RowIndex,
        active_ingredient: impl Into<String>,
        presentation: impl Into<String>,
    ) -> Self {
        Self {
            index,
            active_ingredient: active_ingredient.into(),
            presentation: presentation.into(),
            product: None,
            eans: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_product(mut self, product: Option<String>) -> Self {
        self.product = product;
        self
    }

    #[must_use]
    pub fn with_eans(mut self, eans: Vec<String>) -> Self {
        self.eans = eans;
        self
    }
}

/// Ordered collection of catalog rows, addressable by [`RowIndex`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Vec<CatalogRow>,
    positions: HashMap<RowIndex, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting rows that reuse an index.
    pub fn new(rows: Vec<CatalogRow>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            if positions.insert(row.index, position).is_some() {
                return Err(ModelError::DuplicateRowIndex(row.index));
            }
        }
        Ok(Self { rows, positions })
    }

    /// Rows in load order.
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: RowIndex) -> Option<&CatalogRow> {
        self.positions
            .get(&index)
            .and_then(|&position| self.rows.get(position))
    }

    /// Restrict the catalog to the given row indexes, preserving their order.
    pub fn select(&self, indexes: &[RowIndex]) -> Result<Vec<&CatalogRow>> {
        indexes
            .iter()
            .map(|&index| self.get(index).ok_or(ModelError::UnknownRowIndex(index)))
            .collect()
    }

    /// Barcodes of the given rows in row order, each listed once.
    pub fn eans_of(&self, indexes: &[RowIndex]) -> Vec<String> {
        let mut eans: Vec<String> = Vec::new();
        for row in indexes.iter().filter_map(|&index| self.get(index)) {
            for ean in &row.eans {
                if !eans.contains(ean) {
                    eans.push(ean.clone());
                }
            }
        }
        eans
    }

    /// Distinct product names of the given rows in row order.
    pub fn products_of(&self, indexes: &[RowIndex]) -> Vec<String> {
        let mut products: Vec<String> = Vec::new();
        for product in indexes
            .iter()
            .filter_map(|&index| self.get(index))
            .filter_map(|row| row.product.as_ref())
        {
            if !products.contains(product) {
                products.push(product.clone());
            }
        }
        products
    }
}
