//! `doable undo` / `doable redo` command implementations

use anyhow::Result;

pub fn run_undo(list: &str) -> Result<()> {
    let mut store = super::open_store(list)?;
    if store.undo() {
        println!("Undid the last change ({} todo(s) now).", store.todos().len());
    } else {
        println!("Nothing to undo.");
    }
    Ok(())
}

pub fn run_redo(list: &str) -> Result<()> {
    let mut store = super::open_store(list)?;
    if store.redo() {
        println!("Redid the last undone change ({} todo(s) now).", store.todos().len());
    } else {
        println!("Nothing to redo.");
    }
    Ok(())
}
