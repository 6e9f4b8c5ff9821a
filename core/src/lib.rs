//! Client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and reconciles outcomes into
//! an in-memory session model. The caller executes the actual HTTP
//! round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`. Each operation is
//!   split into `build_*` (produces request) and `parse_*` (consumes
//!   response), so the I/O boundary is explicit.
//! - `TodoState` owns the cached collection, the new-todo draft, and the
//!   single error slot; `settle_*` methods apply request outcomes. Local
//!   state is never mutated before a request settles.
//! - Success is judged by HTTP status class only; all failures collapse into
//!   one fixed message per operation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod state;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::TodoState;
pub use types::{CreateTodo, Todo, UpdateTodo};
