use anyhow::Result;
use clap::Args;
use colored::*;
use std::path::PathBuf;

use store_lookup::workbook::StoreListRepository;

#[derive(Args)]
pub struct UploadCommands {
    /// Store list workbook (.xlsx) with 'Store Number', 'Mall / Store Name' and 'Region Code' columns
    pub file: PathBuf,
}

pub fn handle_upload_command(args: UploadCommands, repository: &StoreListRepository) -> Result<()> {
    if !args.file.exists() {
        anyhow::bail!("Store list file does not exist: {}", args.file.display());
    }

    let table = repository.upload(&args.file)?;
    println!(
        "{} Store list uploaded and saved as the new default ({} stores).",
        "✓".bright_green().bold(),
        table.len().to_string().bright_green().bold()
    );
    println!("  {}", repository.path().display().to_string().dimmed());
    Ok(())
}
