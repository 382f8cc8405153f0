//! Command-line shell around the store lookup core

pub mod app;
pub mod commands;

pub use app::{Cli, Commands};

use anyhow::Result;
use colored::*;
use is_terminal::IsTerminal;
use log::info;
use std::path::Path;

use store_lookup::config::Config;
use store_lookup::store::StoreTable;
use store_lookup::workbook::StoreListRepository;

pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Load the session's store list: a supplied workbook (saved as the new
/// default) or the saved default. `None` when there is nothing to work with.
pub fn load_store_table(repository: &StoreListRepository, supplied: Option<&Path>) -> Result<Option<StoreTable>> {
    let table = match supplied {
        Some(path) => {
            let table = repository.upload(path)?;
            println!(
                "{} {}",
                "✓".bright_green().bold(),
                "Store list uploaded and saved as the new default.".bright_green()
            );
            table
        }
        None => {
            let table = repository.load_default();
            println!(
                "{} {}",
                "ℹ".bright_blue(),
                format!("Using default store list from {}", repository.path().display()).dimmed()
            );
            table
        }
    };

    if table.is_empty() {
        println!("{} {}", "⚠️ ".bright_yellow(), "No store list available.".bright_yellow().bold());
        return Ok(None);
    }

    info!("Session store list has {} stores", table.len());
    Ok(Some(table))
}

pub fn run(cli: Cli, mut config: Config) -> Result<()> {
    let repository = StoreListRepository::new(config.settings.default_store_list.clone());
    let supplied = cli.store_list.as_deref();

    match cli.command {
        Some(Commands::Config(args)) => commands::config::handle_config_command(args, &mut config),
        Some(Commands::Upload(args)) => commands::upload::handle_upload_command(args, &repository),
        Some(Commands::Lookup(args)) => {
            let Some(table) = load_store_table(&repository, supplied)? else {
                return Ok(());
            };
            commands::lookup::handle_lookup_command(args, &table)
        }
        Some(Commands::Filter(args)) => {
            let Some(table) = load_store_table(&repository, supplied)? else {
                return Ok(());
            };
            commands::filter::handle_filter_command(args, &table, &config)
        }
        None if is_interactive() => commands::session::run_session(&repository, supplied, &config),
        None => {
            println!("Store lookup & region code generator");
            println!();
            println!("Run in an interactive terminal for the menu-driven session,");
            println!("or use one of the subcommands:");
            println!();
            println!("  store-lookup lookup <store>           # Resolve a store to its GL code");
            println!("  store-lookup filter <numbers|flag>    # Select and export stores");
            println!("  store-lookup upload <file.xlsx>       # Replace the default store list");
            println!("  store-lookup config --help            # Settings management");
            Ok(())
        }
    }
}
