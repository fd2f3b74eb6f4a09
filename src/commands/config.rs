//! Config command - view and update persisted settings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use kittenspeak::settings::{default_settings_path, Settings};

use super::CommandExecutor;

/// Show or update the settings file.
///
/// With no flags the current values are printed. Each flag updates one
/// setting; changed settings are written back to disk.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Set the encoding strength (1-5)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub strength: Option<u8>,

    /// Enable or disable encoding of outgoing messages
    #[arg(short, long)]
    pub enabled: Option<bool>,

    /// Show or hide the reveal icon on encoded messages
    #[arg(long)]
    pub show_icon: Option<bool>,

    /// Settings file to use (defaults to ~/.kittenspeak/settings.toml)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => default_settings_path().context("Failed to resolve settings path")?,
        };

        let mut settings = Settings::load_from(&path).context("Failed to load settings")?;

        let mut changed = false;
        if let Some(strength) = self.strength {
            settings
                .set_strength(strength)
                .context("Failed to set strength")?;
            changed = true;
        }
        if let Some(enabled) = self.enabled {
            settings.enabled = enabled;
            changed = true;
        }
        if let Some(show_icon) = self.show_icon {
            settings.show_icon = show_icon;
            changed = true;
        }

        if changed {
            settings
                .save_to(&path)
                .context("Failed to save settings")?;
            eprintln!("Settings saved to {}", path.display());
        }

        println!("strength = {}", settings.strength);
        println!("enabled = {}", settings.enabled);
        println!("show_icon = {}", settings.show_icon);

        Ok(())
    }
}
