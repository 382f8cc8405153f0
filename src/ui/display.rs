//! Terminal rendering of lookup results and store tables

use anyhow::{Context, Result};
use colored::*;
use serde_json::{Map, Value};

use crate::store::{StoreRecord, StoreTable, render_gl_code};

pub fn print_gl_code(region_code: &str) {
    println!(
        "{} This bills to: GL code {}",
        "✓".bright_green().bold(),
        render_gl_code(region_code).bright_white().bold()
    );
}

pub fn print_not_found() {
    println!("{} {}", "✗".bright_red().bold(), "Store not found.".bright_red());
}

pub fn print_no_matches() {
    println!("{} {}", "⚠️ ".bright_yellow(), "No matches found.".bright_yellow());
}

pub fn print_suggestions(candidates: &[&StoreRecord]) {
    println!("  {}", "Did you mean one of these?".bright_white().bold());
    for record in candidates {
        println!(
            "  {} {} {}",
            "•".dimmed(),
            record.store_name.bright_cyan(),
            format!("(#{}, region {})", record.store_number, record.region_code).dimmed()
        );
    }
}

/// Fixed-width text table with a header rule
pub fn render_table(table: &StoreTable) -> String {
    let headers = table.headers();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for record in table {
        for (width, cell) in widths.iter_mut().zip(record.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    output.push_str(&format_row(headers).bold().to_string());
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|&width| "─".repeat(width))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    output.push('\n');
    for record in table {
        output.push_str(&format_row(record.cells()));
        output.push('\n');
    }
    output
}

pub fn render_csv(table: &StoreTable) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(table.headers())
        .context("Failed to write CSV header")?;
    for record in table {
        writer
            .write_record(record.cells())
            .context("Failed to write CSV row")?;
    }

    let bytes = writer.into_inner().context("Failed to flush CSV output")?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

pub fn render_json(table: &StoreTable, pretty: bool) -> Result<String> {
    let rows: Vec<Value> = table
        .iter()
        .map(|record| {
            let row: Map<String, Value> = table
                .headers()
                .iter()
                .zip(record.cells())
                .map(|(header, cell)| (header.clone(), Value::String(cell.clone())))
                .collect();
            Value::Object(row)
        })
        .collect();

    let value = Value::Array(rows);
    if pretty {
        serde_json::to_string_pretty(&value).context("Failed to format JSON output")
    } else {
        serde_json::to_string(&value).context("Failed to format JSON output")
    }
}
