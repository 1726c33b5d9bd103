//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::list::ListArgs;
use super::task::{AddArgs, EditArgs, TaskRefArgs};
use super::theme::ThemeCommands;

#[derive(Parser)]
#[command(name = "taskscreen")]
#[command(about = "Terminal client for a remote task list")]
#[command(version)]
pub struct Cli {
    /// Base URL of the task API (overrides config.toml)
    #[arg(long, global = true, env = "TASKSCREEN_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Add a new task
    Add(AddArgs),

    /// Flip a task between completed and pending
    Toggle(TaskRefArgs),

    /// Change a task's title (this also marks it pending)
    Edit(EditArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Delete(TaskRefArgs),

    /// Show or toggle the light/dark theme preference
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
