//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently.
//! The backend may attach extra fields (e.g. a `created_at` timestamp);
//! serde ignores unknown fields, so the client only carries what it renders.
//! Integration tests catch any schema drift between the two sides.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
///
/// `id` is assigned by the backend and immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
}

/// Request payload for creating a new todo. The backend assigns the id and
/// echoes the full record back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for the toggle operation. The client's PUT body is
/// exactly `{"completed": <bool>}`; other fields are never sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub completed: bool,
}
