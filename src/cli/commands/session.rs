//! Interactive menu-driven session

use anyhow::Result;
use colored::*;
use dialoguer::Select;
use std::path::{Path, PathBuf};

use store_lookup::config::Config;
use store_lookup::store::StoreTable;
use store_lookup::ui::prompts::{prompt_filter_input, prompt_store_identifier, text_input};
use store_lookup::workbook::{StoreListRepository, read_store_table};

use super::filter::{Export, OutputFormat, filter_and_export};
use super::lookup::lookup_store;

#[derive(Debug)]
enum SessionOption {
    Single,
    Multiple,
    Upload,
    Exit,
}

impl std::fmt::Display for SessionOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionOption::Single => write!(f, "🔎 {} - {}", "Single".bright_blue().bold(), "Look up one store's GL code".dimmed()),
            SessionOption::Multiple => write!(f, "📋 {} - {}", "Multiple".bright_green().bold(), "Filter by store numbers or flag".dimmed()),
            SessionOption::Upload => write!(f, "📤 {} - {}", "Upload".bright_yellow().bold(), "Replace the default store list".dimmed()),
            SessionOption::Exit => write!(f, "🚪 {} - {}", "Exit".bright_red().bold(), "Leave store lookup".dimmed()),
        }
    }
}

fn print_banner(table: &StoreTable) {
    println!();
    println!("  {}", "🏬 Store Lookup & Region Code Generator".bright_blue().bold());
    println!("  {}", "══════════════════════════════════════".bright_blue());
    println!("  {} {}", "Stores loaded:".dimmed(), table.len().to_string().bright_white().bold());
    let flags = table.flag_columns().collect::<Vec<_>>();
    if !flags.is_empty() {
        println!("  {} {}", "Flags:".dimmed(), flags.join(", ").bright_cyan());
    }
    println!();
}

/// Run the session loop until the user exits.
///
/// The table is replaced wholesale when a new list is uploaded.
pub fn run_session(repository: &StoreListRepository, supplied: Option<&Path>, config: &Config) -> Result<()> {
    let Some(mut table) = crate::cli::load_store_table(repository, supplied)? else {
        return Ok(());
    };

    let options = [
        SessionOption::Single,
        SessionOption::Multiple,
        SessionOption::Upload,
        SessionOption::Exit,
    ];

    loop {
        print_banner(&table);

        let selection = Select::new()
            .with_prompt("Single or Multiple Store?")
            .items(&options)
            .default(0)
            .interact()?;

        let outcome = match options[selection] {
            SessionOption::Single => prompt_store_identifier()
                .and_then(|identifier| lookup_store(&table, &identifier, true)),
            SessionOption::Multiple => prompt_filter_input().and_then(|spec| {
                let export = Export::Ask(PathBuf::from(&config.settings.export_file_name));
                filter_and_export(&table, &spec, OutputFormat::Table, false, export)
            }),
            SessionOption::Upload => match upload_interactive(repository) {
                Ok(Some(uploaded)) => {
                    table = uploaded;
                    Ok(())
                }
                Ok(None) => Ok(()),
                Err(e) => Err(e),
            },
            SessionOption::Exit => break,
        };

        if let Err(e) = outcome {
            println!("{} {:#}", "Error:".bright_red().bold(), e);
        }
    }

    Ok(())
}

fn upload_interactive(repository: &StoreListRepository) -> Result<Option<StoreTable>> {
    let path = text_input("Path to new store list (.xlsx)", None)?;
    let path = PathBuf::from(path.trim());

    let uploaded = read_store_table(&path)?;
    if uploaded.is_empty() {
        println!("{} {}", "⚠️ ".bright_yellow(), "Uploaded store list has no stores; keeping the current one.".bright_yellow());
        return Ok(None);
    }

    repository.replace_default(&uploaded)?;
    println!(
        "{} {}",
        "✓".bright_green().bold(),
        "Store list uploaded and saved as the new default.".bright_green()
    );
    Ok(Some(uploaded))
}
