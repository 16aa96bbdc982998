use std::path::{Path, PathBuf};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use pricenorm_cli::types::{FileStatus, RunResult};
use pricenorm_output::ProductSeries;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_dir.display());
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Layout"),
        header_cell("Products"),
        header_cell("Records"),
        header_cell("Dropped"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    let mut total_records = 0usize;
    let mut total_dropped = 0usize;
    for outcome in &result.files {
        total_records += outcome.records;
        total_dropped += outcome.dropped;
        table.add_row(vec![
            Cell::new(file_label(&outcome.file))
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            match outcome.layout {
                Some(layout) => Cell::new(layout),
                None => dim_cell("-"),
            },
            count_cell(outcome.products, Color::Reset),
            count_cell(outcome.records, Color::Reset),
            count_cell(outcome.dropped, Color::Yellow),
            status_cell(&outcome.status),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} files", result.files.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        count_cell(total_dropped, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    let failures: Vec<_> = result.failed().collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for outcome in failures {
            if let FileStatus::Failed { error } = &outcome.status {
                eprintln!("- {}: {error}", file_label(&outcome.file));
            }
        }
    }
}

pub fn print_inspection(inspected: &[(PathBuf, Vec<ProductSeries>)]) {
    if inspected.is_empty() {
        println!("No normalized files found.");
        return;
    }
    for (file, series) in inspected {
        println!("{}", file.display());
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Product"),
            header_cell("Points"),
            header_cell("First"),
            header_cell("Last"),
            header_cell("Min"),
            header_cell("Max"),
        ]);
        apply_table_style(&mut table);
        for index in [1, 4, 5] {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for product in series {
            let (min, max) = match product.value_range() {
                Some((min, max)) => (Cell::new(min), Cell::new(max)),
                None => (dim_cell("-"), dim_cell("-")),
            };
            table.add_row(vec![
                Cell::new(&product.product),
                Cell::new(product.len()),
                optional_cell(product.first_date()),
                optional_cell(product.last_date()),
                min,
                max,
            ]);
        }
        println!("{table}");
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

fn status_cell(status: &FileStatus) -> Cell {
    match status {
        FileStatus::Normalized => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        FileStatus::Empty => Cell::new("EMPTY").fg(Color::Yellow),
        FileStatus::Failed { .. } => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn optional_cell<T: ToString>(value: Option<T>) -> Cell {
    match value {
        Some(value) => Cell::new(value.to_string()),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
