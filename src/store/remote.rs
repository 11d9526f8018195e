//! Client for the hosted task store's REST interface.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use uuid::Uuid;

use super::{StoreError, TaskStore};
use crate::models::{Task, TaskDraft};

const URL_VAR: &str = "TASK_STORE_URL";
const KEY_VAR: &str = "TASK_STORE_KEY";

/// Client for a hosted PostgREST-style task store.
///
/// Each operation is a single HTTP request against the `tasks` table.
/// Writes ask the store to return the affected row
/// (`Prefer: return=representation`) so the caller sees exactly what
/// was recorded.
pub struct RemoteTaskStore {
    client: Client,
    url: String,
    api_key: String,
}

impl RemoteTaskStore {
    pub fn new(url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Read the store URL and key from `TASK_STORE_URL` and
    /// `TASK_STORE_KEY`.
    pub fn from_env() -> Result<Self, StoreError> {
        let url = std::env::var(URL_VAR).map_err(|_| StoreError::MissingEnv(URL_VAR))?;
        let key = std::env::var(KEY_VAR).map_err(|_| StoreError::MissingEnv(KEY_VAR))?;
        Ok(Self::new(&url, &key))
    }

    fn tasks_url(&self) -> String {
        format!("{}/rest/v1/tasks", self.url)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

#[async_trait]
impl TaskStore for RemoteTaskStore {
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let resp = self
            .authed(self.client.get(format!(
                "{}?select=*&order=created_at.desc",
                self.tasks_url()
            )))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Rejected { status, body: text });
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn insert_task(&self, draft: &TaskDraft) -> Result<Task, StoreError> {
        let resp = self
            .authed(self.client.post(self.tasks_url()))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(draft)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Rejected { status, body: text });
        }
        let rows: Vec<Task> = serde_json::from_str(&text)?;
        rows.into_iter().next().ok_or(StoreError::EmptyReply)
    }

    async fn update_task(&self, id: Uuid, draft: &TaskDraft) -> Result<Task, StoreError> {
        // Every mutation refreshes updated_at.
        let body = serde_json::json!({
            "title": draft.title,
            "description": draft.description,
            "status": draft.status,
            "priority": draft.priority,
            "updated_at": Utc::now(),
        });

        let resp = self
            .authed(
                self.client
                    .patch(format!("{}?id=eq.{}", self.tasks_url(), id)),
            )
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Rejected { status, body: text });
        }
        let rows: Vec<Task> = serde_json::from_str(&text)?;
        rows.into_iter().next().ok_or(StoreError::NotFound)
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), StoreError> {
        let resp = self
            .authed(
                self.client
                    .delete(format!("{}?id=eq.{}", self.tasks_url(), id)),
            )
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(StoreError::Rejected { status, body });
        }
        Ok(())
    }
}
