//! Multiple-store mode: select by store number list or flag column, then export

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::*;
use log::info;
use std::path::{Path, PathBuf};

use store_lookup::config::Config;
use store_lookup::store::{StoreTable, filter_stores};
use store_lookup::ui::display::{print_no_matches, render_csv, render_json, render_table};
use store_lookup::ui::prompts::{prompt_download, prompt_filter_input};
use store_lookup::workbook::write_store_table;

#[derive(Args)]
pub struct FilterCommands {
    /// Comma-separated store numbers (e.g. '101, 202,303') or a flag column name (e.g. 'kids')
    pub spec: Option<String>,

    /// Save the matching stores to this workbook (.xlsx)
    #[arg(short, long, help = "Save matches to an .xlsx file")]
    pub output: Option<PathBuf>,

    /// How to print the matching stores
    #[arg(long, default_value = "table", help = "Output format")]
    pub format: OutputFormat,

    /// Pretty print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table (default)
    Table,
    /// CSV with the workbook's header row
    Csv,
    /// JSON array of row objects
    Json,
    /// Only the match count
    Count,
}

pub fn handle_filter_command(args: FilterCommands, table: &StoreTable, config: &Config) -> Result<()> {
    let interactive = crate::cli::is_interactive();

    let spec = match args.spec {
        Some(spec) => spec,
        None if interactive => prompt_filter_input()?,
        None => anyhow::bail!("Provide store numbers or a flag name, e.g. 'store-lookup filter kids'"),
    };

    let export = match args.output {
        Some(path) => Export::To(path),
        None if interactive => Export::Ask(PathBuf::from(&config.settings.export_file_name)),
        None => Export::Skip,
    };

    filter_and_export(table, &spec, args.format, args.pretty, export)
}

/// What to do with a non-empty selection
pub enum Export {
    To(PathBuf),
    Ask(PathBuf),
    Skip,
}

pub fn filter_and_export(
    table: &StoreTable,
    spec: &str,
    format: OutputFormat,
    pretty: bool,
    export: Export,
) -> Result<()> {
    if spec.is_empty() {
        return Ok(());
    }

    let filtered = filter_stores(table, spec)
        .with_context(|| format!("Cannot filter stores by '{}'", spec))?;

    if filtered.is_empty() {
        print_no_matches();
        return Ok(());
    }

    println!(
        "{} Found {} matching stores.",
        "✓".bright_green().bold(),
        filtered.len().to_string().bright_green().bold()
    );
    println!();

    match format {
        OutputFormat::Table => println!("{}", render_table(&filtered)),
        OutputFormat::Csv => print!("{}", render_csv(&filtered)?),
        OutputFormat::Json => println!("{}", render_json(&filtered, pretty)?),
        OutputFormat::Count => {}
    }

    match export {
        Export::To(path) => save_filtered(&filtered, &path)?,
        Export::Ask(path) => {
            if prompt_download(&path.display().to_string())? {
                save_filtered(&filtered, &path)?;
            }
        }
        Export::Skip => {}
    }

    Ok(())
}

fn save_filtered(filtered: &StoreTable, path: &Path) -> Result<()> {
    write_store_table(filtered, path)?;
    info!("Exported {} stores to {:?}", filtered.len(), path);
    println!(
        "💾 Filtered list saved to: {}",
        path.display().to_string().bright_green()
    );
    Ok(())
}
