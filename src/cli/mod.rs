//! CLI command implementations

pub mod add;
pub mod clear;
pub mod done;
pub mod edit;
pub mod list;
pub mod remove;
pub mod set;
pub mod stats;
pub mod undo;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use crate::todo::{JsonFile, Todo, TodoId, TodoStore};

#[derive(Parser)]
#[command(name = "doable", about = "Command-line to-do list manager", version)]
pub struct Cli {
    /// To-do list to operate on (defaults to the configured list)
    #[arg(short, long, global = true, env = "DOABLE_LIST")]
    pub list: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new todo
    Add(add::AddArgs),

    /// List todos
    List(list::ListArgs),

    /// Toggle a todo between completed and pending
    Done(done::DoneArgs),

    /// Rewrite a todo's text
    Edit(edit::EditArgs),

    /// Change a todo's priority or category
    Set(set::SetArgs),

    /// Delete a todo
    Rm(remove::RemoveArgs),

    /// Remove completed todos, or the whole list
    Clear(clear::ClearArgs),

    /// Undo the most recent change
    Undo,

    /// Reapply the most recently undone change
    Redo,

    /// Show collection statistics
    Stats(stats::StatsArgs),

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub(crate) fn open_store(list: &str) -> Result<TodoStore> {
    let port = JsonFile::new(list)?;
    TodoStore::open(Box::new(port))
}

/// Resolve a user-supplied identifier to a todo id: numeric id first, then
/// exact text, then unique case-insensitive text prefix.
pub fn resolve_todo(identifier: &str, todos: &[Todo]) -> Result<TodoId> {
    if let Ok(id) = identifier.parse::<TodoId>() {
        if todos.iter().any(|t| t.id == id) {
            return Ok(id);
        }
    }

    if let Some(todo) = todos.iter().find(|t| t.text == identifier) {
        return Ok(todo.id);
    }

    let lower = identifier.to_lowercase();
    let mut matches = todos
        .iter()
        .filter(|t| t.text.to_lowercase().starts_with(&lower));
    match (matches.next(), matches.next()) {
        (Some(todo), None) => Ok(todo.id),
        (Some(_), Some(_)) => bail!("Ambiguous todo: {}", identifier),
        _ => bail!("Todo not found: {}", identifier),
    }
}

/// Truncate to `max` characters, appending `...` when anything was cut.
/// Counts chars, not bytes, so multibyte text never splits mid-character.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    }
}
