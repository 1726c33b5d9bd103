//! taskscreen - terminal client for a remote task list API

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::sync::Mutex;
use taskscreen::cli::{self, Cli, Commands};
use taskscreen::config::{get_app_dir, Config};
use taskscreen::tui;
use tracing_subscriber::EnvFilter;

/// The TUI owns the terminal, so debug output goes to a file.
fn init_debug_logging() -> Result<()> {
    let path = get_app_dir()?.join("debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taskscreen=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKSCREEN_DEBUG").is_ok() {
        init_debug_logging()?;
    }

    let cli = Cli::parse();

    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "taskscreen", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Some(Commands::List(args)) => cli::list::run(&config, api_url, args).await,
        Some(Commands::Add(args)) => cli::task::run_add(&config, api_url, args).await,
        Some(Commands::Toggle(args)) => cli::task::run_toggle(&config, api_url, args).await,
        Some(Commands::Edit(args)) => cli::task::run_edit(&config, api_url, args).await,
        Some(Commands::Delete(args)) => cli::task::run_delete(&config, api_url, args).await,
        Some(Commands::Theme { command }) => cli::theme::run(command).await,
        None => tui::run(&config, api_url).await,
        Some(Commands::Completion { .. }) => unreachable!(),
    }
}
