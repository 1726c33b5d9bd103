//! `taskscreen list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{require_applied, truncate};
use crate::api::{Task, TaskId};
use crate::config::Config;
use crate::filter::Filter;
use crate::screen::LiveScreen;

const TABLE_COL_ID: usize = 8;
const TABLE_COL_DONE: usize = 4;
const TABLE_COL_TITLE: usize = 60;

#[derive(Args)]
pub struct ListArgs {
    /// Which tasks to show: all, completed or pending
    #[arg(short, long, default_value = "all")]
    filter: Filter,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    id: &'a TaskId,
    title: &'a str,
    completed: bool,
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<width_done$} TITLE",
        "ID",
        "DONE",
        width_id = TABLE_COL_ID,
        width_done = TABLE_COL_DONE
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_DONE + TABLE_COL_TITLE + 2)
    );
}

fn print_table_row(task: &Task) {
    let id = truncate(&task.id.to_string(), TABLE_COL_ID);
    let done = if task.completed { "[x]" } else { "[ ]" };
    println!(
        "{:<width_id$} {:<width_done$} {}",
        id,
        done,
        truncate(&task.title, TABLE_COL_TITLE),
        width_id = TABLE_COL_ID,
        width_done = TABLE_COL_DONE
    );
}

pub async fn run(config: &Config, api_url: Option<&str>, args: ListArgs) -> Result<()> {
    let mut screen = LiveScreen::open(config, api_url)?;
    let outcome = screen.refresh().await;
    require_applied(&screen, outcome, "list tasks")?;

    screen.set_filter(args.filter);
    let tasks = screen.visible_tasks();

    if args.json {
        let rows: Vec<TaskJson> = tasks
            .iter()
            .map(|t| TaskJson {
                id: &t.id,
                title: &t.title,
                completed: t.completed,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks listed.");
        return Ok(());
    }

    print_table_header();
    for task in &tasks {
        print_table_row(task);
    }
    println!();
    println!(
        "{} of {} task(s) shown ({})",
        tasks.len(),
        screen.tasks().len(),
        args.filter
    );

    Ok(())
}
