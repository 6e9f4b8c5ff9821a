//! Stateful session model: the todo collection, the draft form, and the
//! error slot.
//!
//! # Design
//! `TodoState` owns everything the UI renders and never performs I/O. Each
//! operation follows the same shape: the UI asks for the request inputs,
//! the host executes the round-trip, and a `settle_*` method applies the
//! outcome. On success the local collection is reconciled and the error slot
//! cleared; on failure the slot is set to a fixed per-operation message and
//! the collection is left untouched. Nothing is mutated before a request
//! settles, so failures never need a rollback.
//!
//! The error slot holds at most one message: the next success clears it, the
//! next failure overwrites it. The underlying `ApiError` is only ever
//! emitted as a diagnostic log line.

use tracing::warn;

use crate::error::ApiError;
use crate::types::{CreateTodo, Todo};

/// Message shown when the initial or manual reload fails.
pub const FETCH_FAILED: &str = "Failed to fetch todos. Make sure the backend is running.";
/// Message shown when submitting the draft fails.
pub const ADD_FAILED: &str = "Failed to add todo";
/// Message shown when a toggle fails.
pub const UPDATE_FAILED: &str = "Failed to update todo";
/// Message shown when a delete fails.
pub const DELETE_FAILED: &str = "Failed to delete todo";

/// In-memory client state: the cached todo collection, the in-progress
/// new-todo draft, and the single error slot.
///
/// The collection is a cache of what the backend is believed to hold; it is
/// never authoritative and is rebuilt from the backend on every startup.
#[derive(Debug, Default)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub draft_title: String,
    pub draft_description: String,
    pub error: Option<String>,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the draft fields into a create payload, or `None` when the title
    /// is empty or whitespace-only — in which case no request must be issued
    /// at all. The draft fields themselves are not cleared here; that only
    /// happens once the backend confirms the create.
    pub fn draft_create(&self) -> Option<CreateTodo> {
        if self.draft_title.trim().is_empty() {
            return None;
        }
        Some(CreateTodo {
            title: self.draft_title.clone(),
            description: self.draft_description.clone(),
            completed: false,
        })
    }

    /// The `completed` value a toggle request for `id` should ask for, i.e.
    /// the flip of the record's current value. `None` when the id is not in
    /// the collection.
    pub fn toggle_target(&self, id: u64) -> Option<bool> {
        self.todos.iter().find(|t| t.id == id).map(|t| !t.completed)
    }

    /// Apply the outcome of a load-all request. Success replaces the entire
    /// collection with the backend's ordered sequence.
    pub fn settle_load(&mut self, result: Result<Vec<Todo>, ApiError>) {
        match result {
            Ok(todos) => {
                self.todos = todos;
                self.error = None;
            }
            Err(err) => {
                warn!(%err, "load request failed");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
    }

    /// Apply the outcome of a create request. Success appends the
    /// backend-returned record (with its assigned id) and clears the draft;
    /// failure preserves the draft so the user can retry.
    pub fn settle_create(&mut self, result: Result<Todo, ApiError>) {
        match result {
            Ok(todo) => {
                self.todos.push(todo);
                self.draft_title.clear();
                self.draft_description.clear();
                self.error = None;
            }
            Err(err) => {
                warn!(%err, "create request failed");
                self.error = Some(ADD_FAILED.to_string());
            }
        }
    }

    /// Apply the outcome of a toggle request that asked the backend to set
    /// `completed` on the record with `id`. The record was not tentatively
    /// flipped beforehand, so the failure path has nothing to roll back.
    pub fn settle_toggle(&mut self, id: u64, completed: bool, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = completed;
                }
                self.error = None;
            }
            Err(err) => {
                warn!(%err, id, "toggle request failed");
                self.error = Some(UPDATE_FAILED.to_string());
            }
        }
    }

    /// Apply the outcome of a delete request for `id`.
    pub fn settle_delete(&mut self, id: u64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.todos.retain(|t| t.id != id);
                self.error = None;
            }
            Err(err) => {
                warn!(%err, id, "delete request failed");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }
}
