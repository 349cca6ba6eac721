use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The task content. Never blank.
    pub text: String,
    /// Completion flag, `false` on creation.
    pub done: bool,
    /// Identifier of the user who created the task. Never changes.
    pub owner_id: Uuid,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new, not yet completed `Task` owned by `owner_id`.
    pub fn new(text: impl Into<String>, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            done: false,
            owner_id,
            created_at: Utc::now(),
        }
    }
}

/// Request body carrying a task's text, used by both creation and text edits.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskTextInput {
    #[serde(rename = "tarea")]
    pub text: String,
}

/// Response body for a freshly created task.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedTask {
    pub id: Uuid,
}
