use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use store_lookup::config::{Config, SETTING_KEYS};

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show current settings
    Show,
    /// Print the config file location
    Path,
    /// Set the value of a specific setting
    Set {
        /// Setting name
        name: String,
        /// Setting value
        value: String,
    },
    /// Reset a setting to its default value
    Reset {
        /// Setting name
        name: String,
    },
}

pub fn handle_config_command(args: ConfigCommands, config: &mut Config) -> Result<()> {
    match args.command {
        ConfigSubcommands::Show => {
            println!();
            println!("  {}", "Settings:".bright_white().bold());
            for key in SETTING_KEYS {
                println!("  {} {} = {}", "•".dimmed(), key.bright_cyan(), config.get_setting(key)?);
            }
            println!();
            Ok(())
        }
        ConfigSubcommands::Path => {
            println!("{}", Config::get_config_path()?.display());
            Ok(())
        }
        ConfigSubcommands::Set { name, value } => {
            config.set_setting(&name, &value)?;
            config.save()?;
            println!(
                "{} {} = {}",
                "✓".bright_green().bold(),
                name.bright_green().bold(),
                config.get_setting(&name)?
            );
            Ok(())
        }
        ConfigSubcommands::Reset { name } => {
            config.reset_setting(&name)?;
            config.save()?;
            println!(
                "{} {} reset to {}",
                "✓".bright_green().bold(),
                name.bright_green().bold(),
                config.get_setting(&name)?
            );
            Ok(())
        }
    }
}
