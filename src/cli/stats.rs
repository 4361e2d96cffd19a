//! `doable stats` command implementation

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(list: &str, args: StatsArgs) -> Result<()> {
    let store = super::open_store(list)?;
    let stats = store.stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{} total • {} completed • {}%",
        stats.total, stats.completed, stats.percent
    );
    if stats.overdue > 0 {
        println!("{} overdue", stats.overdue);
    }
    Ok(())
}
