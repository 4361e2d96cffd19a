//! `doable list` command implementation

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use crate::todo::{Filter, Query, SortKey, Todo};

const TABLE_COL_ID: usize = 4;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_COL_CATEGORY: usize = 10;
const TABLE_COL_DUE: usize = 12;
const TABLE_COL_TEXT: usize = 40;

#[derive(Args)]
pub struct ListArgs {
    /// Show only matching todos (all, pending, completed, or a category)
    #[arg(short, long)]
    filter: Option<String>,

    /// Sort order (priority, due, created); unrecognized keys keep
    /// insertion order
    #[arg(short, long)]
    sort: Option<String>,

    /// Case-insensitive text search
    #[arg(long)]
    search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TodoJson<'a> {
    id: u64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    due: Option<chrono::NaiveDate>,
    priority: &'a str,
    category: &'a str,
    completed: bool,
    overdue: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn print_table_header() {
    println!(
        "{:<width_id$} {:<2} {:<width_pri$} {:<width_cat$} {:<width_due$} TEXT",
        "ID",
        "",
        "PRIORITY",
        "CATEGORY",
        "DUE",
        width_id = TABLE_COL_ID,
        width_pri = TABLE_COL_PRIORITY,
        width_cat = TABLE_COL_CATEGORY,
        width_due = TABLE_COL_DUE
    );
    println!(
        "{}",
        "-".repeat(
            TABLE_COL_ID + TABLE_COL_PRIORITY + TABLE_COL_CATEGORY + TABLE_COL_DUE + TABLE_COL_TEXT
        )
    );
}

fn print_table_row(todo: &Todo) {
    let done = if todo.completed { "x" } else { " " };
    let due = match todo.due {
        Some(due) if todo.is_overdue() => format!("{}!", due.format("%Y-%m-%d")),
        Some(due) => due.format("%Y-%m-%d").to_string(),
        None => String::new(),
    };
    println!(
        "{:<width_id$} {:<2} {:<width_pri$} {:<width_cat$} {:<width_due$} {}",
        todo.id.to_string(),
        done,
        todo.priority.label(),
        todo.category.label(),
        due,
        super::truncate(&todo.text, TABLE_COL_TEXT),
        width_id = TABLE_COL_ID,
        width_pri = TABLE_COL_PRIORITY,
        width_cat = TABLE_COL_CATEGORY,
        width_due = TABLE_COL_DUE
    );
}

pub fn run(list: &str, args: ListArgs) -> Result<()> {
    let filter = match &args.filter {
        Some(s) => match Filter::parse(s) {
            Some(filter) => filter,
            None => bail!("Unknown filter: {} (expected all, pending, completed, or a category)", s),
        },
        None => Filter::All,
    };

    // An unrecognized sort key means "no reordering".
    let sort = args
        .sort
        .as_deref()
        .map(|s| SortKey::parse(s).unwrap_or_default())
        .unwrap_or_default();

    let query = Query {
        filter,
        sort,
        search: args.search.unwrap_or_default(),
    };

    let store = super::open_store(list)?;
    let todos = store.query(&query);

    if args.json {
        let rows: Vec<TodoJson> = todos
            .iter()
            .map(|t| TodoJson {
                id: t.id.0,
                text: &t.text,
                due: t.due,
                priority: t.priority.label(),
                category: t.category.label(),
                completed: t.completed,
                overdue: t.is_overdue(),
                created_at: t.created_at,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if todos.is_empty() {
        println!("No todos yet. Add one to get started!");
        return Ok(());
    }

    print_table_header();
    for todo in todos {
        print_table_row(todo);
    }

    Ok(())
}
