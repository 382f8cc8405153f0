//! Single-store mode: exact lookup with a fuzzy "did you mean" fallback

use anyhow::Result;
use clap::Args;
use log::info;

use store_lookup::store::{StoreTable, pick_suggestion, resolve_region, suggest_candidates};
use store_lookup::ui::display::{print_gl_code, print_not_found, print_suggestions};
use store_lookup::ui::prompts::{prompt_store_identifier, prompt_suggestion};

#[derive(Args)]
pub struct LookupCommands {
    /// Store number or store name (case and surrounding spaces are ignored)
    pub identifier: Option<String>,

    /// List close matches instead of asking which one was meant
    #[arg(long)]
    pub no_prompt: bool,
}

pub fn handle_lookup_command(args: LookupCommands, table: &StoreTable) -> Result<()> {
    let interactive = crate::cli::is_interactive();

    let identifier = match args.identifier {
        Some(identifier) => identifier,
        None if interactive => prompt_store_identifier()?,
        None => anyhow::bail!("Provide a store number or name, e.g. 'store-lookup lookup 42'"),
    };

    lookup_store(table, &identifier, interactive && !args.no_prompt)
}

/// Resolve one identifier and print its GL code, falling back to suggestions
pub fn lookup_store(table: &StoreTable, identifier: &str, prompt: bool) -> Result<()> {
    if identifier.trim().is_empty() {
        return Ok(());
    }

    if let Some(region_code) = resolve_region(table, identifier) {
        print_gl_code(region_code);
        return Ok(());
    }

    let candidates = suggest_candidates(table, identifier);
    if candidates.is_empty() {
        info!("No store matches '{}'", identifier);
        print_not_found();
        return Ok(());
    }

    if !prompt {
        print_suggestions(&candidates);
        return Ok(());
    }

    let names: Vec<String> = candidates
        .iter()
        .map(|record| record.store_name.clone())
        .collect();

    if let Some(selection) = prompt_suggestion(&names)? {
        if let Some(record) = pick_suggestion(&candidates, &names[selection]) {
            info!("Picked suggestion '{}' for '{}'", record.store_name, identifier);
            print_gl_code(&record.region_code);
        }
    }

    Ok(())
}
