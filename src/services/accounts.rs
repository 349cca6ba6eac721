use crate::auth::{PasswordHasher, TokenService};
use crate::error::AppError;
use crate::models::User;
use crate::store::Store;

/// Registers `username` unless it already exists.
///
/// Registering an existing username is a silent no-op, and the stored
/// password is left untouched. Returns `true` when a new user was created.
pub async fn register(
    store: &dyn Store,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<bool, AppError> {
    if store.find_user_by_username(username).await?.is_some() {
        log::debug!("user {} already registered", username);
        return Ok(false);
    }

    let password_hash = hasher.hash_password(password).await?;
    let created = store
        .insert_user_if_absent(&User::new(username, password_hash))
        .await?;

    if created {
        log::info!("registered user {}", username);
    }
    Ok(created)
}

/// Verifies the credentials and issues a session token for the user.
///
/// An unknown username is `Unauthenticated`; a wrong password is `Forbidden`.
pub async fn login(
    store: &dyn Store,
    hasher: &PasswordHasher,
    tokens: &TokenService,
    username: &str,
    password: &str,
) -> Result<String, AppError> {
    let user = match store.find_user_by_username(username).await? {
        Some(user) => user,
        None => {
            log::warn!("login attempt for unknown user {}", username);
            return Err(AppError::Unauthenticated("unknown user".into()));
        }
    };

    if !hasher.verify_password(password, &user.password_hash).await? {
        log::warn!("wrong password for user {}", username);
        return Err(AppError::Forbidden("invalid credentials".into()));
    }

    tokens.issue(user.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[actix_rt::test]
    async fn test_register_is_idempotent() {
        let store = MemoryStore::new();

        assert!(register(&store, &hasher(), "vikis", "1234").await.unwrap());
        assert!(!register(&store, &hasher(), "vikis", "other").await.unwrap());

        assert_eq!(store.user_count().await, 1);
        let user = store.find_user_by_username("vikis").await.unwrap().unwrap();
        assert_ne!(user.password_hash, "1234");
        assert!(hasher().verify_password("1234", &user.password_hash).await.unwrap());
    }

    #[actix_rt::test]
    async fn test_login_issues_token_for_user() {
        let store = MemoryStore::new();
        let tokens = TokenService::new("secret", None);
        register(&store, &hasher(), "vikis", "1234").await.unwrap();

        let token = login(&store, &hasher(), &tokens, "vikis", "1234")
            .await
            .unwrap();

        let user = store.find_user_by_username("vikis").await.unwrap().unwrap();
        assert_eq!(tokens.verify(&token).unwrap().sub, user.id);
    }

    #[actix_rt::test]
    async fn test_login_failures() {
        let store = MemoryStore::new();
        let tokens = TokenService::new("secret", None);
        register(&store, &hasher(), "vikis", "1234").await.unwrap();

        let wrong_password = login(&store, &hasher(), &tokens, "vikis", "wrong").await;
        assert!(matches!(wrong_password, Err(AppError::Forbidden(_))));

        let unknown_user = login(&store, &hasher(), &tokens, "nobody", "1234").await;
        assert!(matches!(unknown_user, Err(AppError::Unauthenticated(_))));
    }
}
