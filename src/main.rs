//! Doable - command-line to-do list manager

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use doable::cli::{self, Cli, Commands};
use doable::migrations;
use doable::todo::Config;

fn main() -> Result<()> {
    if std::env::var("DOABLE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("doable=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion generation needs no app data or migrations.
    // It works in read-only environments (e.g. Nix builds).
    if let Commands::Completion { shell } = cli.command {
        generate(shell, &mut Cli::command(), "doable", &mut std::io::stdout());
        return Ok(());
    }

    migrations::run_migrations()?;

    let config = Config::load().unwrap_or_default();
    let list = cli.list.unwrap_or_else(|| config.default_list.clone());

    match cli.command {
        Commands::Add(args) => cli::add::run(&list, &config, args),
        Commands::List(args) => cli::list::run(&list, args),
        Commands::Done(args) => cli::done::run(&list, args),
        Commands::Edit(args) => cli::edit::run(&list, args),
        Commands::Set(args) => cli::set::run(&list, args),
        Commands::Rm(args) => cli::remove::run(&list, args),
        Commands::Clear(args) => cli::clear::run(&list, args),
        Commands::Undo => cli::undo::run_undo(&list),
        Commands::Redo => cli::undo::run_redo(&list),
        Commands::Stats(args) => cli::stats::run(&list, args),
        Commands::Completion { .. } => unreachable!(),
    }
}
