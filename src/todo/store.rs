//! The todo collection and its mutation/undo machinery.
//!
//! [`TodoStore`] owns the ordered record list, the undo/redo stacks, and the
//! persistence port. Every mutation follows the same shape: validate, push a
//! snapshot of the current state, mutate, then save best-effort through the
//! port. Queries and statistics never touch state or history.

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::model::{Category, Priority, Todo, TodoId};
use super::query::{Query, Stats};
use super::storage::Persistence;

/// Oldest snapshots are dropped beyond this depth.
const MAX_HISTORY: usize = 100;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("todo text cannot be empty")]
    EmptyText,

    #[error("no todo with id {0}")]
    NotFound(TodoId),

    #[error("unknown priority '{0}' (expected low, medium, or high)")]
    InvalidPriority(String),

    #[error("unknown category '{0}' (expected general, work, personal, shopping, or health)")]
    InvalidCategory(String),
}

/// Undo/redo stacks: full snapshots of the collection, newest last.
/// A snapshot is taken before every successful mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub undo: Vec<Vec<Todo>>,
    #[serde(default)]
    pub redo: Vec<Vec<Todo>>,
}

pub struct TodoStore {
    todos: Vec<Todo>,
    history: History,
    next_id: u64,
    port: Box<dyn Persistence>,
}

impl TodoStore {
    /// Open a store over a persistence port. The collection and any saved
    /// history are loaded once, here; afterwards the in-memory state is
    /// authoritative for the session.
    pub fn open(port: Box<dyn Persistence>) -> Result<Self> {
        let (todos, history) = port.load_with_history()?;

        // The counter must clear every id in the history too, or an undone
        // add followed by a new add could hand out a duplicate.
        let max_id = todos
            .iter()
            .chain(history.undo.iter().flatten())
            .chain(history.redo.iter().flatten())
            .map(|t| t.id.0)
            .max()
            .unwrap_or(0);

        Ok(Self {
            todos,
            history,
            next_id: max_id + 1,
            port,
        })
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Filtered + sorted view over the collection. Pure.
    pub fn query(&self, query: &Query) -> Vec<&Todo> {
        query.run(&self.todos)
    }

    /// Derived statistics. Pure.
    pub fn stats(&self) -> Stats {
        Stats::compute(&self.todos)
    }

    /// Add a new pending todo. Text that trims to empty is rejected before
    /// any state change.
    pub fn add(
        &mut self,
        text: &str,
        due: Option<NaiveDate>,
        priority: Priority,
        category: Category,
    ) -> Result<Todo, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        self.checkpoint();
        let todo = Todo::new(TodoId(self.next_id), text, due, priority, category);
        self.next_id += 1;
        self.todos.push(todo.clone());
        self.persist();
        Ok(todo)
    }

    /// Flip completion on the matching todo.
    pub fn toggle(&mut self, id: TodoId) -> Result<(), StoreError> {
        let idx = self.position(id)?;
        self.checkpoint();
        self.todos[idx].completed = !self.todos[idx].completed;
        self.persist();
        Ok(())
    }

    /// Delete the matching todo.
    pub fn remove(&mut self, id: TodoId) -> Result<Todo, StoreError> {
        let idx = self.position(id)?;
        self.checkpoint();
        let removed = self.todos.remove(idx);
        self.persist();
        Ok(removed)
    }

    /// Replace the text of the matching todo. Which row is "being edited"
    /// is the caller's transient state; the store only sees the final text.
    pub fn rename(&mut self, id: TodoId, new_text: &str) -> Result<(), StoreError> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let idx = self.position(id)?;
        self.checkpoint();
        self.todos[idx].text = new_text.to_string();
        self.persist();
        Ok(())
    }

    pub fn set_priority(&mut self, id: TodoId, priority: Priority) -> Result<(), StoreError> {
        let idx = self.position(id)?;
        self.checkpoint();
        self.todos[idx].priority = priority;
        self.persist();
        Ok(())
    }

    pub fn set_category(&mut self, id: TodoId, category: Category) -> Result<(), StoreError> {
        let idx = self.position(id)?;
        self.checkpoint();
        self.todos[idx].category = category;
        self.persist();
        Ok(())
    }

    /// Remove every completed todo, preserving the relative order of the
    /// rest. Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        self.checkpoint();
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        let removed = before - self.todos.len();
        self.persist();
        removed
    }

    /// Empty the collection. Asking the user first is the caller's job.
    pub fn clear_all(&mut self) -> usize {
        self.checkpoint();
        let removed = self.todos.len();
        self.todos.clear();
        self.persist();
        removed
    }

    /// Restore the state before the most recent mutation. Returns false
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo.pop() {
            Some(prev) => {
                let current = std::mem::replace(&mut self.todos, prev);
                self.history.redo.push(current);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Reapply the most recently undone mutation. Returns false when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo.pop() {
            Some(next) => {
                let current = std::mem::replace(&mut self.todos, next);
                self.history.undo.push(current);
                self.persist();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.history.redo.is_empty()
    }

    fn position(&self, id: TodoId) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Snapshot the current state onto the undo stack. Any redo branch is
    /// abandoned: mutating after an undo forks the timeline.
    fn checkpoint(&mut self) {
        self.history.undo.push(self.todos.clone());
        if self.history.undo.len() > MAX_HISTORY {
            self.history.undo.remove(0);
        }
        self.history.redo.clear();
    }

    /// Best-effort save through the port. The in-memory state stays
    /// authoritative for the session when the save fails.
    fn persist(&self) {
        if let Err(e) = self.port.save_with_history(&self.todos, &self.history) {
            warn!("Failed to save todo list: {:#}", e);
        }
    }
}
