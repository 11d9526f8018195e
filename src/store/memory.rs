//! In-memory task store for tests and local development.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{StoreError, TaskStore};
use crate::models::{Task, TaskDraft};

/// In-memory [`TaskStore`]. Assigns ids and timestamps the way the
/// hosted store would.
#[derive(Default)]
pub struct MemoryTaskStore {
    rows: Mutex<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known set of rows.
    pub fn seeded(rows: Vec<Task>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let rows = self.rows.lock().expect("task store lock poisoned");
        let mut rows = rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert_task(&self, draft: &TaskDraft) -> Result<Task, StoreError> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: draft.priority,
            created_at: now,
            updated_at: now,
        };

        let mut rows = self.rows.lock().expect("task store lock poisoned");
        rows.push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: Uuid, draft: &TaskDraft) -> Result<Task, StoreError> {
        let mut rows = self.rows.lock().expect("task store lock poisoned");
        let row = rows
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;

        row.title = draft.title.clone();
        row.description = draft.description.clone();
        row.status = draft.status;
        row.priority = draft.priority;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().expect("task store lock poisoned");
        let position = rows
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        rows.remove(position);
        Ok(())
    }
}
