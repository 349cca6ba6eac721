//! Persistence port.
//!
//! Handlers and services only ever see `dyn Store`. `PgStore` backs the server
//! with a single process-wide connection pool, and `MemoryStore` provides the
//! same semantics in-process.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage operations required by the accounts and task services.
///
/// Every method is a single store round-trip; mutations by id report how many
/// records they touched so callers can tell a missing task from a success.
#[async_trait]
pub trait Store: Send + Sync {
    /// Looks a user up by its unique username.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Inserts `user` unless its username is already taken.
    ///
    /// Returns `true` if the user was created.
    async fn insert_user_if_absent(&self, user: &User) -> Result<bool, AppError>;

    /// Lists every registered user, oldest first.
    async fn list_users(&self) -> Result<Vec<User>, AppError>;

    /// Lists the tasks owned by `owner_id`, oldest first.
    async fn find_tasks_by_owner(&self, owner_id: Uuid) -> Result<Vec<Task>, AppError>;

    async fn insert_task(&self, task: &Task) -> Result<(), AppError>;

    /// Deletes a task by id. Returns the number of deleted tasks.
    async fn delete_task(&self, id: Uuid) -> Result<u64, AppError>;

    /// Replaces a task's text. Returns the number of modified tasks, so
    /// rewriting the current text counts as 0.
    async fn update_task_text(&self, id: Uuid, text: &str) -> Result<u64, AppError>;

    /// Flips a task's `done` flag in one step. Returns the number of modified tasks.
    async fn toggle_task_done(&self, id: Uuid) -> Result<u64, AppError>;
}
