//! `taskscreen add/toggle/edit/delete` command implementations

use anyhow::{bail, Result};
use clap::Args;

use super::{require_applied, resolve_task};
use crate::api::TaskId;
use crate::config::Config;
use crate::screen::LiveScreen;

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,
}

#[derive(Args)]
pub struct TaskRefArgs {
    /// Task ID (or exact title)
    identifier: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID (or exact title)
    identifier: String,

    /// New title
    #[arg(required = true, num_args = 1..)]
    title: Vec<String>,
}

/// Fetches the list so later operations see the server's current tasks.
async fn load(
    config: &Config,
    api_url: Option<&str>,
    identifier: &str,
) -> Result<(LiveScreen, TaskId)> {
    let mut screen = LiveScreen::open(config, api_url)?;
    let outcome = screen.refresh().await;
    require_applied(&screen, outcome, "list tasks")?;
    let id = resolve_task(identifier, screen.tasks())?.id.clone();
    Ok((screen, id))
}

pub async fn run_add(config: &Config, api_url: Option<&str>, args: AddArgs) -> Result<()> {
    let title = args.title.join(" ");
    if title.trim().is_empty() {
        bail!("Task title cannot be empty");
    }

    let mut screen = LiveScreen::open(config, api_url)?;
    screen.set_input(&title);
    let outcome = screen.add_task().await;
    require_applied(&screen, outcome, "empty title")?;

    if let Some(task) = screen.tasks().last() {
        println!("✓ Added task {}: {}", task.id, task.title);
    }
    Ok(())
}

pub async fn run_toggle(config: &Config, api_url: Option<&str>, args: TaskRefArgs) -> Result<()> {
    let (mut screen, id) = load(config, api_url, &args.identifier).await?;
    let outcome = screen.toggle_completed(&id).await;
    require_applied(&screen, outcome, "task not found")?;

    if let Some(task) = screen.find(&id) {
        let state = if task.completed { "completed" } else { "pending" };
        println!("✓ Task {} is now {}: {}", task.id, state, task.title);
    }
    Ok(())
}

pub async fn run_edit(config: &Config, api_url: Option<&str>, args: EditArgs) -> Result<()> {
    let title = args.title.join(" ");
    if title.trim().is_empty() {
        bail!("Task title cannot be empty");
    }

    let (mut screen, id) = load(config, api_url, &args.identifier).await?;
    let was_completed = screen.find(&id).is_some_and(|t| t.completed);

    screen.begin_edit(&id);
    screen.set_input(&title);
    let outcome = screen.commit_edit().await;
    require_applied(&screen, outcome, "task not found")?;

    if let Some(task) = screen.find(&id) {
        println!("✓ Updated task {}: {}", task.id, task.title);
    }
    if was_completed {
        println!("  Note: editing a task marks it pending again.");
    }
    Ok(())
}

pub async fn run_delete(config: &Config, api_url: Option<&str>, args: TaskRefArgs) -> Result<()> {
    let (mut screen, id) = load(config, api_url, &args.identifier).await?;
    let title = screen
        .find(&id)
        .map(|t| t.title.clone())
        .unwrap_or_default();

    let outcome = screen.delete_task(&id).await;
    require_applied(&screen, outcome, "task not found")?;

    println!("✓ Deleted task {}: {}", id, title);
    Ok(())
}
