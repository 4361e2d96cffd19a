//! `doable rm` command implementation

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct RemoveArgs {
    /// Todo id or text
    identifier: String,
}

pub fn run(list: &str, args: RemoveArgs) -> Result<()> {
    let mut store = super::open_store(list)?;
    let id = super::resolve_todo(&args.identifier, store.todos())?;

    let removed = store.remove(id)?;

    println!("Removed {}: {}", removed.id, removed.text);
    Ok(())
}
