use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use cmed_model::NoticeMatch;

use crate::types::{ClassifyResult, GroupResult, MatchRun};

const DESCRIPTION_WIDTH: usize = 60;

pub fn print_grouping(result: &GroupResult) {
    println!("Catalog: {}", result.catalog.display());
    println!("{}", grouping_table(result));
}

/// One row per ingredient cluster plus a totals row.
fn grouping_table(result: &GroupResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Ingredient"),
        header_cell("Canonical form"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for cluster in &result.grouping {
        let canonical = if cluster.canonical.as_str() == cluster.name {
            dim_cell(&cluster.canonical)
        } else {
            Cell::new(&cluster.canonical)
        };
        table.add_row(vec![
            Cell::new(&cluster.name).fg(Color::Blue),
            canonical,
            Cell::new(cluster.len()),
        ]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        total_cell(format!("{} clusters", result.grouping.len())),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn print_classification(result: &ClassifyResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Query"),
        header_cell("Canonical form"),
        header_cell("Ingredient"),
        header_cell("Score"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(&result.query),
        Cell::new(&result.canonical),
        Cell::new(&result.ingredient)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        score_cell(Some(result.score)),
        Cell::new(result.cluster_size),
    ]);
    println!("{table}");
}

pub fn print_matches(run: &MatchRun) {
    println!(
        "Catalog: {} ({} rows, {} clusters)",
        run.catalog.display(),
        run.catalog_rows,
        run.clusters
    );
    println!("Notice: {}", run.notice.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Description"),
        header_cell("Ingredient"),
        header_cell("Score"),
        header_cell("Candidates"),
        header_cell("Reduction"),
        header_cell("EANs"),
    ]);
    apply_match_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    for matched in &run.matches {
        table.add_row(match_row(matched));
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        total_cell(format!(
            "{} lines, {} matched, {} unique",
            run.matches.len(),
            run.matched_count(),
            run.unique_count()
        )),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_matches_json(run: &MatchRun) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(run)?);
    Ok(())
}

fn match_row(matched: &NoticeMatch) -> Vec<Cell> {
    let description = Cell::new(truncate(&matched.original_description, DESCRIPTION_WIDTH));
    match &matched.result {
        Some(result) => vec![
            Cell::new(matched.line),
            description,
            Cell::new(&result.ingredient).fg(Color::Blue),
            score_cell(Some(result.ingredient_score)),
            candidates_cell(result.matched_count, result.cluster_size),
            Cell::new(format!("{:.0}%", result.reduction_ratio * 100.0)),
            eans_cell(&result.eans),
        ],
        None => vec![
            Cell::new(matched.line),
            description,
            Cell::new("unmatched").fg(Color::Red),
            score_cell(None),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ],
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_match_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn score_cell(score: Option<f64>) -> Cell {
    match score {
        Some(value) if value >= 0.9 => Cell::new(format!("{value:.3}")).fg(Color::Green),
        Some(value) if value >= 0.75 => Cell::new(format!("{value:.3}")).fg(Color::Yellow),
        Some(value) => Cell::new(format!("{value:.3}")).fg(Color::Red),
        None => dim_cell("-"),
    }
}

fn candidates_cell(matched: usize, cluster_size: usize) -> Cell {
    let cell = Cell::new(format!("{matched}/{cluster_size}"));
    if matched == 1 {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn eans_cell(eans: &[String]) -> Cell {
    match eans {
        [] => dim_cell("-"),
        [only] => Cell::new(only),
        [first, rest @ ..] => Cell::new(format!("{first} +{}", rest.len())),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn total_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use cmed_model::{GroupingTable, IngredientCluster};

    use super::*;

    #[test]
    fn grouping_table_lists_clusters_and_totals() {
        let result = GroupResult {
            catalog: PathBuf::from("cmed.csv"),
            rows: 4,
            grouping: GroupingTable::new(vec![
                IngredientCluster::new("dipirona sodica", vec![0, 2]),
                IngredientCluster::new("sertralina cloridrato", vec![1, 3]),
            ]),
        };
        let mut table = grouping_table(&result);
        table.force_no_tty();
        insta::assert_snapshot!(table.to_string(), @r"
        ╭───────────────────────┬───────────────────────┬──────╮
        │ Ingredient            ┆ Canonical form        ┆ Rows │
        ╞═══════════════════════╪═══════════════════════╪══════╡
        │ dipirona sodica       ┆ dipirona sodica       ┆    2 │
        │ sertralina cloridrato ┆ cloridrato sertralina ┆    2 │
        │ TOTAL                 ┆ 2 clusters            ┆    4 │
        ╰───────────────────────┴───────────────────────┴──────╯
        ");
    }

    #[test]
    fn long_descriptions_are_cut() {
        assert_eq!(truncate("dipirona", 20), "dipirona");
        assert_eq!(truncate("dipirona sodica", 9), "dipirona…");
        assert_eq!(truncate("ação", 4), "ação");
    }
}
