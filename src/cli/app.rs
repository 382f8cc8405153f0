use super::commands::config::ConfigCommands;
use super::commands::filter::FilterCommands;
use super::commands::lookup::LookupCommands;
use super::commands::upload::UploadCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "store-lookup")]
#[command(about = "Look up store billing region GL codes and filter store lists")]
pub struct Cli {
    /// Store list workbook (.xlsx) to use; it also replaces the saved default
    #[arg(long, global = true)]
    pub store_list: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a single store number or name to its GL code
    Lookup(LookupCommands),
    /// Select stores by number list or flag column and export them
    Filter(FilterCommands),
    /// Replace the default store list with a workbook
    Upload(UploadCommands),
    /// Application settings management
    Config(ConfigCommands),
}
