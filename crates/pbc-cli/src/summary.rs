use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use pbc_map::CategoryScore;
use pbc_model::{BatchSummary, ConfidenceLevel, MatchMethod, PbcItem, Priority};

use crate::types::ClassifyResult;

pub fn print_summary(result: &ClassifyResult) {
    println!("Trial balance: {}", result.source.display());
    println!("Ledger column: {}", result.columns.ledger);
    if let Some(column) = &result.columns.debit {
        println!("Debit column: {column}");
    }
    if let Some(column) = &result.columns.credit {
        println!("Credit column: {column}");
    }
    if let Some(paths) = &result.outputs {
        println!("Mapping: {}", paths.mapping.display());
        println!("PBC items: {}", paths.items.display());
        println!("Report: {}", paths.report.display());
    }
    println!("{}", confidence_table(&result.summary));
    if !result.items.is_empty() {
        println!();
        println!("PBC requests:");
        println!("{}", items_table(&result.items));
    }
    let review = result.summary.needs_review();
    if review > 0 {
        eprintln!("{review} ledger(s) need manual review");
    }
}

pub fn confidence_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Confidence"),
        header_cell("Ledgers"),
        header_cell("Meaning"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (level, count) in [
        (ConfidenceLevel::High, summary.high_confidence_count),
        (ConfidenceLevel::Medium, summary.medium_confidence_count),
        (ConfidenceLevel::Low, summary.low_confidence_count),
    ] {
        table.add_row(vec![
            level_cell(level),
            count_cell(count, level_color(level)),
            dim_cell(level.description()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_ledgers).add_attribute(Attribute::Bold),
        Cell::new(format!(
            "average score {:.2}, success rate {:.2}%",
            summary.average_confidence_score, summary.success_rate
        )),
    ]);
    table
}

pub fn items_table(items: &[PbcItem]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("No"),
        header_cell("Category"),
        header_cell("Group"),
        header_cell("Priority"),
        header_cell("Ledgers"),
        header_cell("Debit"),
        header_cell("Credit"),
    ]);
    apply_items_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for item in items {
        table.add_row(vec![
            Cell::new(item.item_number),
            Cell::new(&item.category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(item.major_category),
            priority_cell(item.priority),
            Cell::new(item.ledger_count),
            amount_cell(item.total_debit),
            amount_cell(item.total_credit),
        ]);
    }
    table
}

/// Per-category scores for `pbc explain`, in the order given.
pub fn explain_table(scores: &[CategoryScore<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Keyword"),
        header_cell("Fuzzy"),
        header_cell("Combined"),
        header_cell("Method"),
        header_cell("Term"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for score in scores {
        let method = score.match_method();
        let term = score.matched_term();
        table.add_row(vec![
            Cell::new(score.category),
            Cell::new(score.keyword),
            Cell::new(score.fuzzy),
            Cell::new(format!("{:.1}", score.combined())).add_attribute(Attribute::Bold),
            method_cell(method),
            if term.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(term)
            },
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_items_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn level_color(level: ConfidenceLevel) -> Color {
    match level {
        ConfidenceLevel::High => Color::Green,
        ConfidenceLevel::Medium => Color::Yellow,
        ConfidenceLevel::Low => Color::Red,
    }
}

fn level_cell(level: ConfidenceLevel) -> Cell {
    Cell::new(level).fg(level_color(level))
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn priority_cell(priority: Priority) -> Cell {
    match priority {
        Priority::High => Cell::new(priority)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Priority::Medium => Cell::new(priority).fg(Color::Yellow),
        Priority::Low => dim_cell(priority),
    }
}

fn method_cell(method: MatchMethod) -> Cell {
    match method {
        MatchMethod::Keyword => Cell::new(method).fg(Color::Blue),
        MatchMethod::Fuzzy => Cell::new(method).fg(Color::Magenta),
    }
}

fn amount_cell(amount: f64) -> Cell {
    if amount == 0.0 {
        dim_cell("-")
    } else {
        Cell::new(format!("{amount:.2}"))
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
