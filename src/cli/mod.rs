//! CLI command implementations

pub mod definition;
pub mod list;
pub mod task;
pub mod theme;

pub use definition::{Cli, Commands};

use anyhow::{bail, Result};

use crate::api::Task;
use crate::screen::{LiveScreen, Outcome};

/// Turns a failed operation into an error carrying the logged message.
pub(crate) fn require_applied(screen: &LiveScreen, outcome: Outcome, what: &str) -> Result<()> {
    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Skipped => bail!("Nothing to do: {}", what),
        Outcome::Failed => bail!("{}", screen.last_error().unwrap_or("request failed")),
    }
}

pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    if let Some(task) = tasks.iter().find(|t| t.id.matches(identifier)) {
        return Ok(task);
    }

    // Fall back to an exact title match
    if let Some(task) = tasks.iter().find(|t| t.title == identifier) {
        return Ok(task);
    }

    bail!("Task not found: {}", identifier)
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
