//! `doable edit` command implementation

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct EditArgs {
    /// Todo id or text
    identifier: String,

    /// New text
    text: String,
}

pub fn run(list: &str, args: EditArgs) -> Result<()> {
    let mut store = super::open_store(list)?;
    let id = super::resolve_todo(&args.identifier, store.todos())?;

    store.rename(id, &args.text)?;

    println!("Updated {}: {}", id, args.text.trim());
    Ok(())
}
