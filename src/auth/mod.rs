//! Credential checks and session tokens.

pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::PasswordHasher;
pub use token::{Claims, TokenService};

lazy_static! {
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// Body of `POST /login`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(rename = "usuario")]
    #[validate(length(min = 1, message = "usuario must not be empty"))]
    pub username: String,
    /// Plaintext; only ever compared against the stored hash.
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Body of `POST /registro`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 3 to 32 characters of letters, digits, `_` or `-`.
    #[serde(rename = "usuario")]
    #[validate(
        length(min = 3, max = 32, message = "usuario must be 3 to 32 characters"),
        regex(
            path = "USERNAME_REGEX",
            message = "usuario may only contain letters, digits, '_' and '-'"
        )
    )]
    pub username: String,
    #[validate(length(min = 4, message = "password must be at least 4 characters"))]
    pub password: String,
}

/// Answer to a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Presented back as `Authorization: Bearer <token>`.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(usuario: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: usuario.to_string(),
            password: password.to_string(),
        }
    }

    fn register(usuario: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: usuario.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(login("vikis", "1234").validate().is_ok());
        assert!(login("", "1234").validate().is_err());
        assert!(login("vikis", "").validate().is_err());
    }

    #[test]
    fn test_login_request_wire_names() {
        let body: LoginRequest =
            serde_json::from_str(r#"{"usuario": "vikis", "password": "1234"}"#).unwrap();
        assert_eq!(body.username, "vikis");

        assert!(serde_json::from_str::<LoginRequest>(r#"{"password": "1234"}"#).is_err());
        assert!(serde_json::from_str::<LoginRequest>(r#"{"username": "vikis", "password": "1234"}"#).is_err());
    }

    #[test]
    fn test_register_request_rules() {
        assert!(register("vikis", "1234").validate().is_ok());
        assert!(register("ana_maria-2", "secreto").validate().is_ok());

        for (usuario, password) in [
            ("vi", "1234"),
            ("una cuenta", "1234"),
            ("ñandú", "1234"),
            (&*"x".repeat(33), "1234"),
            ("vikis", "123"),
        ] {
            assert!(
                register(usuario, password).validate().is_err(),
                "{:?}/{:?} should be rejected",
                usuario,
                password
            );
        }
    }
}
