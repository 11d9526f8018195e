//! View state behind the task UI.
//!
//! Reproduces the single-page app's behavior: a list of tasks fetched
//! from the store, an optional editing selection, and one store call
//! per user action. View state is replaced from the store's returned
//! rows. A failed call is logged and leaves prior state untouched —
//! nothing is applied optimistically, so there is nothing to roll
//! back.

use uuid::Uuid;

use crate::models::{Task, TaskDraft};
use crate::store::TaskStore;

pub struct TaskBoard<S> {
    store: S,
    tasks: Vec<Task>,
    editing: Option<Uuid>,
}

impl<S: TaskStore> TaskBoard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            editing: None,
        }
    }

    /// Rows as last fetched, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The task currently selected for editing, if any.
    pub fn editing(&self) -> Option<&Task> {
        let id = self.editing?;
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the list with the store's current rows.
    pub async fn refresh(&mut self) {
        match self.store.list_tasks().await {
            Ok(rows) => self.tasks = rows,
            Err(e) => tracing::error!("Error fetching tasks: {}", e),
        }
    }

    /// Handle a form submission: update the editing task if one is
    /// selected, otherwise create a new one.
    pub async fn submit(&mut self, draft: TaskDraft) {
        match self.editing {
            Some(id) => self.update(id, draft).await,
            None => self.create(draft).await,
        }
    }

    async fn create(&mut self, draft: TaskDraft) {
        match self.store.insert_task(&draft).await {
            Ok(task) => self.tasks.insert(0, task),
            Err(e) => tracing::error!("Error creating task: {}", e),
        }
    }

    async fn update(&mut self, id: Uuid, draft: TaskDraft) {
        match self.store.update_task(id, &draft).await {
            Ok(updated) => {
                if let Some(row) = self.tasks.iter_mut().find(|t| t.id == updated.id) {
                    *row = updated;
                }
                self.editing = None;
            }
            Err(e) => tracing::error!("Error updating task: {}", e),
        }
    }

    /// Delete a task. Confirmation is the caller's concern; the board
    /// assumes the action was confirmed.
    pub async fn delete(&mut self, id: Uuid) {
        match self.store.delete_task(id).await {
            Ok(()) => self.tasks.retain(|t| t.id != id),
            Err(e) => tracing::error!("Error deleting task: {}", e),
        }
    }

    /// Select a task for editing. Ignored if the id is not in the
    /// list.
    pub fn begin_edit(&mut self, id: Uuid) {
        if self.tasks.iter().any(|t| t.id == id) {
            self.editing = Some(id);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}
