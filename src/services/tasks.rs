//! Task operations, scoped to the caller's verified identity.
//!
//! Listing and creation are bound to the owner taken from the session token.
//! Delete, text edits and toggles address a task by id alone and do not
//! compare the owner; any authenticated user holding an id can mutate it.

use uuid::Uuid;

use crate::error::AppError;
use crate::models::Task;
use crate::store::Store;

/// Returns the caller's tasks, oldest first. Never includes other owners' tasks.
pub async fn list(store: &dyn Store, owner_id: Uuid) -> Result<Vec<Task>, AppError> {
    store.find_tasks_by_owner(owner_id).await
}

/// Creates a task owned by the caller.
pub async fn create(store: &dyn Store, owner_id: Uuid, text: &str) -> Result<Task, AppError> {
    ensure_not_blank(text)?;

    let task = Task::new(text, owner_id);
    store.insert_task(&task).await?;
    log::debug!("user {} created task {}", owner_id, task.id);
    Ok(task)
}

pub async fn delete(store: &dyn Store, id: Uuid) -> Result<u64, AppError> {
    found(store.delete_task(id).await?)
}

pub async fn edit_text(store: &dyn Store, id: Uuid, text: &str) -> Result<u64, AppError> {
    ensure_not_blank(text)?;
    found(store.update_task_text(id, text).await?)
}

/// Flips the task's `done` flag.
pub async fn toggle_state(store: &dyn Store, id: Uuid) -> Result<u64, AppError> {
    found(store.toggle_task_done(id).await?)
}

/// Parses a task id taken from the request path.
pub fn parse_task_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::InvalidInput("invalid task id".into()))
}

fn ensure_not_blank(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::InvalidInput("task text must not be blank".into()));
    }
    Ok(())
}

fn found(count: u64) -> Result<u64, AppError> {
    if count == 0 {
        return Err(AppError::NotFound("task not found".into()));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[actix_rt::test]
    async fn test_create_rejects_blank_text() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        for text in ["", "   ", "\t\n"] {
            assert!(matches!(
                create(&store, owner, text).await,
                Err(AppError::InvalidInput(_))
            ));
        }
        assert!(list(&store, owner).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_create_binds_owner() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let task = create(&store, owner, "buy milk").await.unwrap();

        assert_eq!(task.owner_id, owner);
        assert!(!task.done);
        assert_eq!(store.task(task.id).await, Some(task));
    }

    #[actix_rt::test]
    async fn test_list_only_returns_own_tasks() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let first = create(&store, alice, "first").await.unwrap();
        for i in 0..5 {
            create(&store, bob, &format!("bob {}", i)).await.unwrap();
        }
        let second = create(&store, alice, "second").await.unwrap();

        assert_eq!(list(&store, alice).await.unwrap(), vec![first, second]);
        assert_eq!(list(&store, bob).await.unwrap().len(), 5);
        assert!(list(&store, Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_toggle_twice_restores_state() {
        let store = MemoryStore::new();
        let task = create(&store, Uuid::new_v4(), "a").await.unwrap();

        assert_eq!(toggle_state(&store, task.id).await.unwrap(), 1);
        assert!(store.task(task.id).await.unwrap().done);

        toggle_state(&store, task.id).await.unwrap();
        assert!(!store.task(task.id).await.unwrap().done);
    }

    #[actix_rt::test]
    async fn test_missing_task_is_not_found() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();

        assert!(matches!(delete(&store, id).await, Err(AppError::NotFound(_))));
        assert!(matches!(
            edit_text(&store, id, "new").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            toggle_state(&store, id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_rt::test]
    async fn test_edit_text() {
        let store = MemoryStore::new();
        let task = create(&store, Uuid::new_v4(), "old").await.unwrap();

        assert!(matches!(
            edit_text(&store, task.id, "  ").await,
            Err(AppError::InvalidInput(_))
        ));
        assert_eq!(edit_text(&store, task.id, "new").await.unwrap(), 1);
        assert_eq!(store.task(task.id).await.unwrap().text, "new");
    }

    #[actix_rt::test]
    async fn test_edit_text_unchanged_is_not_found() {
        let store = MemoryStore::new();
        let task = create(&store, Uuid::new_v4(), "same").await.unwrap();

        assert!(matches!(
            edit_text(&store, task.id, "same").await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(store.task(task.id).await.unwrap().text, "same");
    }

    #[actix_rt::test]
    async fn test_delete() {
        let store = MemoryStore::new();
        let task = create(&store, Uuid::new_v4(), "a").await.unwrap();

        assert_eq!(delete(&store, task.id).await.unwrap(), 1);
        assert!(store.task(task.id).await.is_none());
        assert!(matches!(
            delete(&store, task.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_parse_task_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_task_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_task_id("not-a-uuid"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
