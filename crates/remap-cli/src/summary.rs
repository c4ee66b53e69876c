use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{LookupRow, MapResult};

/// How many distinct unmatched tokens the summary table shows.
const UNMATCHED_DISPLAY_LIMIT: usize = 20;

pub fn print_summary(result: &MapResult) {
    println!("Source: {}", result.source.display());
    println!("Output: {}", result.output.display());
    if let Some(path) = &result.unmatched_report {
        println!("Unmatched report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Converted"),
        header_cell("Unmatched"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(result.rows),
        Cell::new(result.converted),
        count_cell(result.unmatched_total),
    ]);
    println!("{table}");
    print_unmatched_table(result);
}

pub fn print_json_summary(result: &MapResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("error: failed to serialize summary: {error}"),
    }
}

pub fn print_lookup(rows: &[LookupRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("Name"),
        header_cell("Tier"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let (name, tier) = match row.resolution.tier {
            Some(tier) => (
                Cell::new(&row.resolution.text).fg(Color::Green),
                Cell::new(tier),
            ),
            None => (
                Cell::new("unmatched").fg(Color::Red),
                dim_cell("-"),
            ),
        };
        table.add_row(vec![Cell::new(&row.token), name, tier]);
    }
    println!("{table}");
}

fn print_unmatched_table(result: &MapResult) {
    if result.unmatched_counts.is_empty() {
        return;
    }
    let mut ordered: Vec<(&String, &usize)> = result.unmatched_counts.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Unmatched id"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (token, count) in ordered.iter().take(UNMATCHED_DISPLAY_LIMIT) {
        table.add_row(vec![
            Cell::new(token).fg(Color::Yellow),
            Cell::new(count),
        ]);
    }
    println!();
    println!("Unmatched ids:");
    println!("{table}");
    if ordered.len() > UNMATCHED_DISPLAY_LIMIT {
        println!(
            "... and {} more (see --unmatched-report)",
            ordered.len() - UNMATCHED_DISPLAY_LIMIT
        );
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
