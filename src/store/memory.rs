use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Store;
use crate::error::AppError;
use crate::models::{Task, User};

/// In-process `Store` keeping records in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    tasks: RwLock<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks a task up by id, regardless of owner.
    pub async fn task(&self, id: Uuid) -> Option<Task> {
        self.tasks.read().await.iter().find(|t| t.id == id).cloned()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn task_count(&self) -> usize {
        self.tasks.read().await.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn insert_user_if_absent(&self, user: &User) -> Result<bool, AppError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username == user.username) {
            return Ok(false);
        }
        users.push(user.clone());
        Ok(true)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_tasks_by_owner(&self, owner_id: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn insert_task(&self, task: &Task) -> Result<(), AppError> {
        self.tasks.write().await.push(task.clone());
        Ok(())
    }

    async fn delete_task(&self, id: Uuid) -> Result<u64, AppError> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok((before - tasks.len()) as u64)
    }

    async fn update_task_text(&self, id: Uuid, text: &str) -> Result<u64, AppError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == id && t.text != text) {
            Some(task) => {
                task.text = text.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn toggle_task_done(&self, id: Uuid) -> Result<u64, AppError> {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_insert_user_if_absent_keeps_first() {
        let store = MemoryStore::new();
        let first = User::new("vikis", "hash-1".to_string());
        let second = User::new("vikis", "hash-2".to_string());

        assert!(store.insert_user_if_absent(&first).await.unwrap());
        assert!(!store.insert_user_if_absent(&second).await.unwrap());

        let stored = store.find_user_by_username("vikis").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(store.user_count().await, 1);
    }

    #[actix_rt::test]
    async fn test_mutations_report_counts() {
        let store = MemoryStore::new();
        let task = Task::new("a", Uuid::new_v4());
        store.insert_task(&task).await.unwrap();

        assert_eq!(store.update_task_text(task.id, "b").await.unwrap(), 1);
        assert_eq!(store.update_task_text(task.id, "b").await.unwrap(), 0);
        assert_eq!(store.toggle_task_done(task.id).await.unwrap(), 1);
        assert_eq!(store.delete_task(task.id).await.unwrap(), 1);

        assert_eq!(store.delete_task(task.id).await.unwrap(), 0);
        assert_eq!(store.update_task_text(task.id, "c").await.unwrap(), 0);
        assert_eq!(store.toggle_task_done(task.id).await.unwrap(), 0);
    }
}
