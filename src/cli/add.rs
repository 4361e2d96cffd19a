//! `doable add` command implementation

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::todo::{Category, Config, Priority, StoreError};

#[derive(Args)]
pub struct AddArgs {
    /// Todo text
    text: String,

    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    due: Option<String>,

    /// Priority (low, medium, high)
    #[arg(short, long)]
    priority: Option<String>,

    /// Category (general, work, personal, shopping, health)
    #[arg(short, long)]
    category: Option<String>,
}

pub fn run(list: &str, config: &Config, args: AddArgs) -> Result<()> {
    let priority = match &args.priority {
        Some(s) => Priority::parse(s).ok_or_else(|| StoreError::InvalidPriority(s.clone()))?,
        None => config.add.priority,
    };

    let category = match &args.category {
        Some(s) => Category::parse(s).ok_or_else(|| StoreError::InvalidCategory(s.clone()))?,
        None => config.add.category,
    };

    let due = args
        .due
        .as_deref()
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| anyhow!("Invalid due date '{}', expected YYYY-MM-DD", s))
        })
        .transpose()?;

    let mut store = super::open_store(list)?;
    let todo = store.add(&args.text, due, priority, category)?;

    println!("Added {}: {}", todo.id, todo.text);
    Ok(())
}
