//! Task store clients.
//!
//! The store itself is an external service; everything here is a
//! client of it. [`RemoteTaskStore`] speaks the hosted store's REST
//! dialect, and [`MemoryTaskStore`] backs tests and local development.

mod memory;
mod remote;

pub use memory::MemoryTaskStore;
pub use remote::RemoteTaskStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Task, TaskDraft};

/// The operations the task UI needs from a store.
///
/// Listing returns rows ordered by creation time descending. Insert
/// and update return the row as the store recorded it, so callers can
/// replace view state from the response.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;
    async fn insert_task(&self, draft: &TaskDraft) -> Result<Task, StoreError>;
    async fn update_task(&self, id: Uuid, draft: &TaskDraft) -> Result<Task, StoreError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store returned {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("store returned no rows")]
    EmptyReply,
    #[error("task not found")]
    NotFound,
    #[error("invalid store response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
}
