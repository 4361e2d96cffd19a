//! `doable set` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::todo::{Category, Priority, StoreError};

#[derive(Args)]
pub struct SetArgs {
    /// Todo id or text
    identifier: String,

    /// New priority (low, medium, high)
    #[arg(short, long)]
    priority: Option<String>,

    /// New category (general, work, personal, shopping, health)
    #[arg(short, long)]
    category: Option<String>,
}

pub fn run(list: &str, args: SetArgs) -> Result<()> {
    if args.priority.is_none() && args.category.is_none() {
        bail!("Nothing to set: pass --priority and/or --category");
    }

    let priority = args
        .priority
        .as_deref()
        .map(|s| Priority::parse(s).ok_or_else(|| StoreError::InvalidPriority(s.to_string())))
        .transpose()?;
    let category = args
        .category
        .as_deref()
        .map(|s| Category::parse(s).ok_or_else(|| StoreError::InvalidCategory(s.to_string())))
        .transpose()?;

    let mut store = super::open_store(list)?;
    let id = super::resolve_todo(&args.identifier, store.todos())?;

    if let Some(priority) = priority {
        store.set_priority(id, priority)?;
    }
    if let Some(category) = category {
        store.set_category(id, category)?;
    }

    let todo = store.get(id).expect("updated todo still present");
    println!(
        "Updated {}: {} [{} / {}]",
        todo.id,
        todo.text,
        todo.priority.label(),
        todo.category.label()
    );
    Ok(())
}
