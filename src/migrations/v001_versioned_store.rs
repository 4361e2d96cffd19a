//! v001: wrap bare-array todos.json files in the versioned envelope.
//!
//! Early builds wrote each list as a plain JSON array of records with no
//! schema version. This migration rewrites every list found on disk into
//! the `{"version": 1, "todos": [...]}` envelope so future format changes
//! have a version to key off.

use anyhow::Result;
use std::fs;
use tracing::{debug, warn};

use crate::todo::model::Todo;
use crate::todo::{get_app_dir, storage::STORE_VERSION};

pub fn run() -> Result<()> {
    let lists_root = get_app_dir()?.join("lists");
    if !lists_root.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(&lists_root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }

        let todos_path = entry.path().join("todos.json");
        if !todos_path.exists() {
            continue;
        }

        let content = fs::read_to_string(&todos_path)?;
        if !content.trim_start().starts_with('[') {
            // Already enveloped (or empty) - nothing to do.
            continue;
        }

        // A list that fails to parse is left untouched rather than risk
        // destroying it; the loader will surface the parse error.
        let todos: Vec<Todo> = match serde_json::from_str(&content) {
            Ok(todos) => todos,
            Err(e) => {
                warn!(
                    "Skipping migration of unparseable list {}: {}",
                    todos_path.display(),
                    e
                );
                continue;
            }
        };

        let envelope = serde_json::json!({
            "version": STORE_VERSION,
            "todos": todos,
        });
        fs::write(&todos_path, serde_json::to_string_pretty(&envelope)?)?;
        debug!("Migrated {} to versioned envelope", todos_path.display());
    }

    Ok(())
}
