//! `doable clear` command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, BufRead, Write};

#[derive(Args)]
pub struct ClearArgs {
    /// Remove every todo, not just the completed ones
    #[arg(long)]
    all: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub fn run(list: &str, args: ClearArgs) -> Result<()> {
    let mut store = super::open_store(list)?;

    if !args.all {
        let removed = store.clear_completed();
        println!("Removed {} completed todo(s).", removed);
        return Ok(());
    }

    let total = store.todos().len();
    if total == 0 {
        println!("Nothing to clear.");
        return Ok(());
    }

    // Emptying the whole list is destructive; the store leaves the
    // confirmation to us.
    if !args.yes && !confirm(&format!("Remove all {} todo(s)? [y/N] ", total))? {
        println!("Aborted.");
        return Ok(());
    }

    let removed = store.clear_all();
    println!("Removed {} todo(s).", removed);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
