//! `doable done` command implementation

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct DoneArgs {
    /// Todo id or text
    identifier: String,
}

pub fn run(list: &str, args: DoneArgs) -> Result<()> {
    let mut store = super::open_store(list)?;
    let id = super::resolve_todo(&args.identifier, store.todos())?;

    store.toggle(id)?;

    let todo = store.get(id).expect("toggled todo still present");
    if todo.completed {
        println!("Completed {}: {}", todo.id, todo.text);
    } else {
        println!("Reopened {}: {}", todo.id, todo.text);
    }
    Ok(())
}
