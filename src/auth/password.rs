use crate::error::AppError;
use bcrypt::{hash, verify};
use tokio::task;

/// bcrypt hashing with a configured work factor.
///
/// Both operations run on the blocking pool so a slow hash never stalls the
/// worker serving other requests.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = task::spawn_blocking(move || hash(password, cost)).await??;
        Ok(hashed)
    }

    pub async fn verify_password(
        &self,
        password: &str,
        hashed_password: &str,
    ) -> Result<bool, AppError> {
        let password = password.to_owned();
        let hashed_password = hashed_password.to_owned();
        let matches = task::spawn_blocking(move || verify(password, &hashed_password)).await??;
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_password_hashing_and_verification() {
        let hasher = PasswordHasher::new(4);
        let hashed = hasher.hash_password("test_password123").await.unwrap();

        assert_ne!(hashed, "test_password123");
        assert!(hasher.verify_password("test_password123", &hashed).await.unwrap());
        assert!(!hasher.verify_password("wrong_password", &hashed).await.unwrap());
    }

    #[actix_rt::test]
    async fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new(4);
        let first = hasher.hash_password("1234").await.unwrap();
        let second = hasher.hash_password("1234").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(first.len(), second.len());
        assert!(hasher.verify_password("1234", &second).await.unwrap());
    }

    #[actix_rt::test]
    async fn test_verify_with_invalid_hash() {
        let hasher = PasswordHasher::new(4);
        match hasher.verify_password("test_password123", "invalidhashformat").await {
            Err(AppError::Internal(msg)) => assert!(msg.contains("password hashing failed")),
            Ok(matches) => assert!(!matches),
            Err(e) => panic!("Unexpected error: {:?}", e),
        }
    }
}
