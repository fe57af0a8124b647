use std::path::Path;

use anyhow::{Context, Result};
use cmed_match::{CatalogVocabulary, MatchEngine, classify_ingredient};
use cmed_normalize::NormalizeOptions;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span, warn};

use cmed_cli::config::AppConfig;
use cmed_cli::pipeline::{IngredientSource, prepare_catalog, prepare_notice};

use crate::cli::{ClassifyArgs, GroupArgs, MatchArgs};
use crate::types::{ClassifyResult, GroupResult, MatchRun};

pub fn run_group(args: &GroupArgs, config: &AppConfig) -> Result<GroupResult> {
    let normalizer = config.normalizer();
    let prepared = prepare_catalog(&args.catalog, &config.catalog, &normalizer)?;
    Ok(GroupResult {
        catalog: args.catalog.clone(),
        rows: prepared.catalog.len(),
        grouping: prepared.grouping,
    })
}

pub fn run_classify(args: &ClassifyArgs, config: &AppConfig) -> Result<ClassifyResult> {
    let normalizer = config.normalizer();
    let prepared = prepare_catalog(&args.catalog, &config.catalog, &normalizer)?;
    let query = normalizer.normalize(&args.ingredient, &NormalizeOptions::notice_description());
    let matched = classify_ingredient(&query, &prepared.grouping)
        .with_context(|| format!("classify '{}'", args.ingredient))?;
    Ok(ClassifyResult {
        canonical: matched.query.to_string(),
        ingredient: matched.name().to_string(),
        score: matched.score,
        cluster_size: matched.cluster.len(),
        query,
    })
}

pub fn run_match(args: &MatchArgs, config: &AppConfig) -> Result<MatchRun> {
    let normalizer = config.normalizer();
    let prepared = prepare_catalog(&args.catalog, &config.catalog, &normalizer)?;

    let mut notice_options = config.notice.clone();
    if let Some(column) = &args.description_column {
        notice_options.description_column = column.clone();
    }
    if let Some(column) = &args.unit_column {
        notice_options.unit_column = column.clone();
    }
    if let Some(column) = &args.ingredient_column {
        notice_options.ingredient_column = Some(column.clone());
    }
    if let Some(delimiter) = args.delimiter {
        notice_options.delimiter = delimiter;
    }

    let vocabulary;
    let source = if notice_options.ingredient_column.is_some() {
        IngredientSource::Column
    } else if config.split_description {
        vocabulary = CatalogVocabulary::from_catalog(&prepared.catalog);
        debug!(
            ingredient_tokens = vocabulary.ingredient_len(),
            presentation_tokens = vocabulary.presentation_len(),
            "catalog vocabulary built"
        );
        IngredientSource::Split(&vocabulary)
    } else {
        IngredientSource::Description
    };
    let lines = prepare_notice(&args.notice, &notice_options, &normalizer, source)?;

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        progress_bar(lines.len())?
    };
    let engine = MatchEngine::new(&prepared.catalog, &prepared.grouping);
    let matches = info_span!("match", lines = lines.len())
        .in_scope(|| engine.match_batch_with(&lines, |_| progress.inc(1)))?;
    progress.finish_and_clear();

    let run = MatchRun {
        catalog: args.catalog.clone(),
        notice: args.notice.clone(),
        catalog_rows: prepared.catalog.len(),
        clusters: prepared.grouping.len(),
        matches,
    };
    let unmatched = run.matches.len() - run.matched_count();
    if unmatched > 0 {
        warn!(unmatched, "some notice lines were not matched");
    }
    info!(
        notice = %display_name(&args.notice),
        lines = run.matches.len(),
        matched = run.matched_count(),
        unique = run.unique_count(),
        "notice matched"
    );
    Ok(run)
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let progress = ProgressBar::new(len as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} lines ({eta})")
            .context("progress bar template")?
            .progress_chars("##-"),
    );
    Ok(progress)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| path.display().to_string(), str::to_string)
}
