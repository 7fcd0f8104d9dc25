use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use flood_ingest::ImportSummary;
use flood_model::{Category, FieldName, SubmissionState};
use flood_validate::{Severity, ValidationResult};

use crate::commands::SubmitOutcome;

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Unit"),
        header_cell("Required"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for category in Category::all() {
        for (position, field) in category.fields().enumerate() {
            let category_cell = if position == 0 {
                Cell::new(category.label())
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                dim_cell("")
            };
            let default = field.name.default_value();
            table.add_row(vec![
                category_cell,
                Cell::new(field.name.as_str()),
                Cell::new(field.label),
                field.unit.map_or_else(|| dim_cell("-"), Cell::new),
                required_cell(field.required),
                if default.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(default)
                },
            ]);
        }
    }
    println!("{table}");
}

/// Import counts go to stderr so `preview` output stays valid JSON.
pub fn print_import_summary(path: &Path, summary: &ImportSummary) {
    eprintln!(
        "Imported {} field(s) from {}",
        summary.imported_count(),
        path.display()
    );
    if !summary.ignored.is_empty() {
        eprintln!("  ignored keys: {}", summary.ignored.join(", "));
    }
    if !summary.unsupported.is_empty() {
        let names: Vec<&str> = summary
            .unsupported
            .iter()
            .copied()
            .map(FieldName::as_str)
            .collect();
        eprintln!("  kept defaults for non-scalar values: {}", names.join(", "));
    }
}

pub fn print_validation(result: &ValidationResult) {
    if result.is_valid() {
        println!("All required fields are filled.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in result.issues() {
        table.add_row(vec![
            severity_cell(issue.severity()),
            Cell::new(issue.field().as_str()),
            Cell::new(issue.message()),
        ]);
    }
    println!("{table}");
}

pub fn print_transition(state: SubmissionState, note: Option<&str>) {
    match note {
        Some(note) => println!("[{state}] {note}"),
        None => println!("[{state}]"),
    }
}

pub fn print_submit_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Completed { id, receipt } => {
            println!();
            match receipt {
                Some(receipt) => println!(
                    "Submission {id} accepted at {} ({} filled field(s)).",
                    receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    receipt.filled_fields
                ),
                None => println!("Submission {id} finished."),
            }
        }
        SubmitOutcome::Rejected { errors } => {
            println!();
            println!("Submission blocked:");
            for error in errors {
                println!("  - {error}");
            }
        }
        SubmitOutcome::Failed { message } => {
            println!();
            println!("Submission failed: {message}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
    }
}

fn required_cell(required: bool) -> Cell {
    if required {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
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
