//! Todo collection: data model, store, queries, and persistence.

pub mod config;
pub mod model;
pub mod query;
pub mod storage;
pub mod store;

pub use config::Config;
pub use model::{Category, Priority, Todo, TodoId};
pub use query::{Filter, Query, SortKey, Stats};
pub use storage::{JsonFile, Memory, Persistence};
pub use store::{History, StoreError, TodoStore};

use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_LIST: &str = "default";

/// App data directory (`~/.doable`), created on first use.
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    let dir = home.join(".doable");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Data directory for one named list (`~/.doable/lists/<list>`), created on
/// first use.
pub fn get_list_dir(list: &str) -> Result<PathBuf> {
    let dir = get_app_dir()?.join("lists").join(list);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
