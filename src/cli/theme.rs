//! `taskscreen theme` command implementation

use anyhow::Result;
use clap::Subcommand;

use crate::prefs::{self, FilePrefStore};

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the stored mode (default)
    Show,

    /// Switch between light and dark
    Toggle,
}

pub async fn run(command: Option<ThemeCommands>) -> Result<()> {
    let store = FilePrefStore::open_default()?;
    let dark = prefs::load_dark_mode(&store).await;

    match command.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => {
            println!("{}", prefs::theme_value(dark));
        }
        ThemeCommands::Toggle => {
            prefs::save_dark_mode(&store, !dark).await?;
            println!("✓ Theme set to {}", prefs::theme_value(!dark));
        }
    }

    Ok(())
}
