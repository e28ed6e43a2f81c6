use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bfhl_core::{FileReport, NO_DATA_PLACEHOLDER, NOT_AVAILABLE};

use crate::types::SubmitResult;

pub fn print_summary(result: &SubmitResult) {
    println!("Endpoint: {}", result.endpoint);
    println!("Data entries sent: {}", result.entry_count);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Items"),
        header_cell("Values"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for section in &result.sections {
        let values_cell = if section.items.is_empty() {
            dim_cell(NO_DATA_PLACEHOLDER)
        } else {
            Cell::new(section.items.join(", "))
        };
        table.add_row(vec![
            Cell::new(section.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(section.items.len()),
            values_cell,
        ]);
    }
    println!("{table}");
    if let Some(report) = &result.file_report {
        print_file_table(report);
    }
}

fn print_file_table(report: &FileReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let valid_cell = if report.valid {
        Cell::new("Yes")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("No").fg(Color::Red).add_attribute(Attribute::Bold)
    };
    table.add_row(vec![Cell::new("File Valid"), valid_cell]);
    table.add_row(vec![
        Cell::new("MIME Type"),
        plain_or_dim(report.mime_type_label()),
    ]);
    table.add_row(vec![
        Cell::new("File Size (KB)"),
        plain_or_dim(report.size_kb_label()),
    ]);
    println!();
    println!("File information:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
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
    } else {
        dim_cell(count)
    }
}

fn plain_or_dim(value: String) -> Cell {
    if value == NOT_AVAILABLE {
        dim_cell(value)
    } else {
        Cell::new(value)
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
