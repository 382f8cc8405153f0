use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

mod cli;

use cli::Cli;
use store_lookup::config::Config;

const LOG_FILE: &str = "store-lookup.log";

fn init_logging() -> Result<()> {
    // Log to a file next to the config (truncated on each run) so prompts stay clean
    let log_path = Config::get_config_path()?.with_file_name(LOG_FILE);
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {:?}", log_path))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    info!("Starting store-lookup");

    let config = Config::load()?;
    debug!("Default store list: {:?}", config.settings.default_store_list);

    cli::run(cli, config)
}
