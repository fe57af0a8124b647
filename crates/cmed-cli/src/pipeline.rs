//! Loading and normalization stages shared by the subcommands.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use cmed_ingest::{
    CatalogOptions, NoticeOptions, RawCatalogRow, RawNoticeLine, load_catalog, load_notice,
};
use cmed_match::{CatalogVocabulary, build_grouping};
use cmed_model::{Catalog, CatalogRow, GroupingTable, NoticeLine};
use cmed_normalize::{NormalizeOptions, Normalizer};
use tracing::{info, info_span};

/// Normalized catalog with its ingredient grouping.
#[derive(Debug)]
pub struct PreparedCatalog {
    pub catalog: Catalog,
    pub grouping: GroupingTable,
}

/// Load, normalize and group a catalog export.
pub fn prepare_catalog(
    path: &Path,
    options: &CatalogOptions,
    normalizer: &Normalizer,
) -> Result<PreparedCatalog> {
    let raw = info_span!("load", path = %path.display())
        .in_scope(|| load_catalog(path, options))
        .with_context(|| format!("load catalog {}", path.display()))?;
    let catalog = info_span!("normalize", rows = raw.len())
        .in_scope(|| normalize_catalog(&raw, normalizer))
        .context("build catalog")?;
    let grouping = info_span!("group").in_scope(|| build_grouping(&catalog));
    Ok(PreparedCatalog { catalog, grouping })
}

/// Normalize catalog rows with the catalog presets.
pub fn normalize_catalog(raw: &[RawCatalogRow], normalizer: &Normalizer) -> Result<Catalog> {
    let start = Instant::now();
    let ingredient = NormalizeOptions::catalog_ingredient();
    let presentation = NormalizeOptions::catalog_presentation();
    let rows = raw
        .iter()
        .map(|row| {
            CatalogRow::new(
                row.index,
                normalizer.normalize(&row.active_ingredient, &ingredient),
                normalizer.normalize(&row.presentation, &presentation),
            )
            .with_product(row.product.clone())
            .with_eans(row.eans.clone())
        })
        .collect();
    let catalog = Catalog::new(rows)?;
    info!(
        rows = catalog.len(),
        duration_ms = start.elapsed().as_millis(),
        "catalog normalized"
    );
    Ok(catalog)
}

/// How the ingredient query of a notice line is obtained.
#[derive(Debug, Clone, Copy)]
pub enum IngredientSource<'a> {
    /// Notice has a dedicated ingredient column.
    Column,
    /// Split the description by catalog vocabulary.
    Split(&'a CatalogVocabulary),
    /// Use the whole description as ingredient and presentation.
    Description,
}

/// Load and normalize a notice table.
pub fn prepare_notice(
    path: &Path,
    options: &NoticeOptions,
    normalizer: &Normalizer,
    source: IngredientSource<'_>,
) -> Result<Vec<NoticeLine>> {
    let raw = info_span!("load", path = %path.display())
        .in_scope(|| load_notice(path, options))
        .with_context(|| format!("load notice {}", path.display()))?;
    let lines = info_span!("normalize", lines = raw.len())
        .in_scope(|| normalize_notice(&raw, normalizer, source));
    Ok(lines)
}

/// Normalize notice lines. Descriptions and dedicated ingredient cells use
/// the description preset, units the unit preset.
pub fn normalize_notice(
    raw: &[RawNoticeLine],
    normalizer: &Normalizer,
    source: IngredientSource<'_>,
) -> Vec<NoticeLine> {
    let start = Instant::now();
    let description_options = NormalizeOptions::notice_description();
    let unit_options = NormalizeOptions::notice_unit();
    let lines: Vec<NoticeLine> = raw
        .iter()
        .map(|line| {
            let description = normalizer.normalize(&line.description, &description_options);
            let unit = normalizer.normalize(&line.unit, &unit_options);
            let (ingredient, presentation) = match (source, &line.ingredient) {
                (IngredientSource::Split(vocabulary), _) => {
                    let parts = vocabulary.split_description(&description);
                    (parts.ingredient, parts.presentation)
                }
                (IngredientSource::Column, Some(ingredient)) => (
                    normalizer.normalize(ingredient, &description_options),
                    description,
                ),
                (IngredientSource::Column | IngredientSource::Description, _) => {
                    (description.clone(), description)
                }
            };
            NoticeLine {
                line: line.line,
                original_description: line.original_description.clone(),
                ingredient,
                presentation,
                unit,
            }
        })
        .collect();
    info!(
        lines = lines.len(),
        duration_ms = start.elapsed().as_millis(),
        "notice normalized"
    );
    lines
}
