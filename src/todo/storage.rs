//! Todo persistence - JSON file port behind a trait
//!
//! The store treats persistence as an injected port: `load` runs once when a
//! store is opened, `save` after every mutation. Saves are best effort; a
//! failed save is logged and never blocks the in-memory mutation.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::warn;

use super::{get_list_dir, model::Todo, store::History, DEFAULT_LIST};

/// On-disk schema version written into the envelope.
pub const STORE_VERSION: u32 = 1;

/// Persistence port for a todo collection.
pub trait Persistence {
    fn load(&self) -> Result<Vec<Todo>>;
    fn save(&self, todos: &[Todo]) -> Result<()>;

    /// Load the collection together with its undo/redo history. Ports that
    /// do not keep history return an empty one.
    fn load_with_history(&self) -> Result<(Vec<Todo>, History)> {
        Ok((self.load()?, History::default()))
    }

    /// Save the collection together with its undo/redo history. Ports that
    /// do not keep history drop it.
    fn save_with_history(&self, todos: &[Todo], _history: &History) -> Result<()> {
        self.save(todos)
    }
}

/// Versioned envelope around the stored records. Bumping [`STORE_VERSION`]
/// requires a matching entry in `crate::migrations`.
#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    todos: Vec<Todo>,
}

/// JSON file persistence under `~/.doable/lists/<list>/todos.json`.
pub struct JsonFile {
    list: String,
    todos_path: PathBuf,
}

impl JsonFile {
    pub fn new(list: &str) -> Result<Self> {
        let list_name = if list.is_empty() {
            DEFAULT_LIST.to_string()
        } else {
            list.to_string()
        };

        let list_dir = get_list_dir(&list_name)?;
        let todos_path = list_dir.join("todos.json");

        Ok(Self {
            list: list_name,
            todos_path,
        })
    }

    pub fn list(&self) -> &str {
        &self.list
    }

    fn history_path(&self) -> PathBuf {
        self.todos_path.with_file_name("history.json")
    }
}

/// Parse either the versioned envelope or the legacy bare array format.
/// Pre-versioning installs wrote the records as a plain JSON array.
fn parse_store(content: &str) -> Result<Vec<Todo>> {
    if content.trim_start().starts_with('[') {
        let todos: Vec<Todo> = serde_json::from_str(content)?;
        return Ok(todos);
    }

    let file: StoreFile = serde_json::from_str(content)?;
    if file.version > STORE_VERSION {
        bail!(
            "todos.json has schema version {} but this build only understands up to {}",
            file.version,
            STORE_VERSION
        );
    }
    Ok(file.todos)
}

impl Persistence for JsonFile {
    fn load(&self) -> Result<Vec<Todo>> {
        if !self.todos_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.todos_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        parse_store(&content)
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        // Create backup
        if self.todos_path.exists() {
            let backup_path = self.todos_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.todos_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let file = StoreFile {
            version: STORE_VERSION,
            todos: todos.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.todos_path, content)?;
        Ok(())
    }

    fn load_with_history(&self) -> Result<(Vec<Todo>, History)> {
        let todos = self.load()?;

        // History lives in a separate file so the todos file stays a plain
        // record list for other tooling.
        let history_path = self.history_path();
        let history = if history_path.exists() {
            let content = fs::read_to_string(&history_path)?;
            if content.trim().is_empty() {
                History::default()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            History::default()
        };

        Ok((todos, history))
    }

    fn save_with_history(&self, todos: &[Todo], history: &History) -> Result<()> {
        self.save(todos)?;

        let content = serde_json::to_string(history)?;
        fs::write(self.history_path(), content)?;

        Ok(())
    }
}

/// In-memory persistence for tests and ephemeral runs. Nothing survives the
/// process and history is not kept. Clones share the same backing buffer,
/// so a test can hold one handle and give another to the store.
#[derive(Default, Clone)]
pub struct Memory {
    todos: Arc<Mutex<Vec<Todo>>>,
}

impl Persistence for Memory {
    fn load(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.lock().unwrap().clone())
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        *self.todos.lock().unwrap() = todos.to_vec();
        Ok(())
    }
}
