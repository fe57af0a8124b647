//! Integration tests for the loading and matching pipeline.

use std::fs;
use std::path::PathBuf;

use cmed_cli::config::AppConfig;
use cmed_cli::logging::{LogConfig, LogFormat};
use cmed_cli::pipeline::{IngredientSource, prepare_catalog, prepare_notice};
use cmed_ingest::ColumnRef;
use cmed_match::{CatalogVocabulary, MatchEngine};
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;

const CATALOG: &str = "\
SUBSTÂNCIA;PRODUTO;APRESENTAÇÃO;EAN 1
DIPIRONA SÓDICA;NOVALGINA;500 MG COM CT BL AL PLAS INC X 20;7891234567890
DIPIRONA SÓDICA;DIPIRONA;500 MG/ML SOL OR CT FR VD AMB X 10 ML;-
CLORIDRATO DE SERTRALINA;ZOLOFT;50 MG COM REV CT BL AL PLAS INC X 28;
SERTRALINA CLORIDRATO;ASSERT;50 MG COM REV CT BL AL PLAS INC X 30;
";

const NOTICE: &str = "\
ITEM;DESCRIÇÃO;UNIDADE
1;\"Dipirona sódica 500mg\ncomprimido\";COMPRIMIDO
2;Dipirona 500mg/ml solução oral frasco 10ml;FRASCO
3;Cloridrato de sertralina 50mg comprimido revestido;COMPRIMIDO
";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn catalog_is_normalized_and_grouped() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "cmed.csv", CATALOG);
    let config = AppConfig::default();
    let prepared =
        prepare_catalog(&path, &config.catalog, &config.normalizer()).expect("prepare catalog");

    assert_eq!(prepared.catalog.len(), 4);
    let row = prepared.catalog.get(0).expect("row 0");
    assert!(row.active_ingredient.starts_with("dipirona"));
    assert!(row.presentation.contains("com"));
    assert_eq!(row.product.as_deref(), Some("NOVALGINA"));
    assert_eq!(row.eans, vec!["7891234567890"]);

    // Both sertraline spellings reduce to one cluster.
    assert_eq!(prepared.grouping.row_count(), 4);
    let sertralina = prepared.grouping.cluster_of(2).expect("cluster of row 2");
    assert_eq!(sertralina.indexes, vec![2, 3]);
}

#[test]
fn notice_lines_match_expected_rows() {
    let dir = TempDir::new().expect("temp dir");
    let catalog_path = write_file(&dir, "cmed.csv", CATALOG);
    let notice_path = write_file(&dir, "edital.csv", NOTICE);
    let config = AppConfig::default();
    let normalizer = config.normalizer();
    let prepared =
        prepare_catalog(&catalog_path, &config.catalog, &normalizer).expect("prepare catalog");
    let vocabulary = CatalogVocabulary::from_catalog(&prepared.catalog);

    let lines = prepare_notice(
        &notice_path,
        &config.notice,
        &normalizer,
        IngredientSource::Split(&vocabulary),
    )
    .expect("prepare notice");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].original_description, "Dipirona sódica 500mgcomprimido");
    assert!(lines[0].ingredient.contains("dipirona"));

    let engine = MatchEngine::new(&prepared.catalog, &prepared.grouping);
    let matches = engine.match_batch(&lines).expect("match batch");
    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|m| m.is_matched()));

    let first = matches[0].result.as_ref().expect("line 0 result");
    assert_eq!(first.cluster_size, 2);
    assert_eq!(matches[0].catalog_indexes, vec![0]);
    assert_eq!(first.reduction_ratio, 0.5);
    assert_eq!(first.eans, vec!["7891234567890"]);
    assert_eq!(first.products, vec!["NOVALGINA"]);

    assert_eq!(matches[1].catalog_indexes, vec![1]);
    let second = matches[1].result.as_ref().expect("line 1 result");
    assert!(second.eans.is_empty());

    let third = matches[2].result.as_ref().expect("line 2 result");
    assert_eq!(third.cluster_size, 2);
    assert!(third.catalog_indexes.iter().all(|index| [2, 3].contains(index)));
}

#[test]
fn ingredient_column_by_position() {
    let dir = TempDir::new().expect("temp dir");
    let catalog_path = write_file(&dir, "cmed.csv", CATALOG);
    let notice_path = write_file(
        &dir,
        "edital.csv",
        "PRINCÍPIO ATIVO;DESCRIÇÃO;UNIDADE\nSertralina;comprimido revestido 50mg;CX\n",
    );
    let mut config = AppConfig::default();
    config.notice.ingredient_column = Some(ColumnRef::Position(0));
    let normalizer = config.normalizer();
    let prepared =
        prepare_catalog(&catalog_path, &config.catalog, &normalizer).expect("prepare catalog");

    let lines = prepare_notice(&notice_path, &config.notice, &normalizer, IngredientSource::Column)
        .expect("prepare notice");
    assert_eq!(lines[0].ingredient, "sertralina");

    let matches = MatchEngine::new(&prepared.catalog, &prepared.grouping)
        .match_batch(&lines)
        .expect("match batch");
    let result = matches[0].result.as_ref().expect("result");
    assert_eq!(result.cluster_size, 2);
}

#[test]
fn missing_notice_column_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let notice_path = write_file(&dir, "edital.csv", "ITEM;TEXTO\n1;dipirona\n");
    let config = AppConfig::default();
    let err = prepare_notice(
        &notice_path,
        &config.notice,
        &config.normalizer(),
        IngredientSource::Description,
    )
    .expect_err("missing description column");
    let message = format!("{err:#}");
    assert!(message.contains("load notice"));
    assert!(message.contains("descricao"));
}

#[test]
fn config_file_is_read() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "cmed.toml",
        "split_description = false\n[notice]\ndelimiter = \",\"\n",
    );
    let config = AppConfig::load_or_default(Some(&path)).expect("load config");
    assert!(!config.split_description);
    assert_eq!(config.notice.delimiter, ',');
    assert_eq!(
        AppConfig::load_or_default(None).expect("defaults"),
        AppConfig::default()
    );
}

#[test]
fn log_config_builders() {
    let config = LogConfig::default()
        .with_level(LevelFilter::DEBUG)
        .with_format(LogFormat::Json)
        .with_log_file(Some(PathBuf::from("cmed.log")));
    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.log_file, Some(PathBuf::from("cmed.log")));
}
