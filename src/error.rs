//!
//! # Custom Error Handling
//!
//! This module defines `AppError`, the single error type shared by the store,
//! the authentication layer and the HTTP handlers.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so a handler (or the
//! authorization gate) can return it directly and Actix Web turns it into the
//! matching status code with a `{"error": "..."}` JSON body. Server-side
//! failures are logged here and answered with a generic message, so store or
//! hashing details never reach the caller.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

const INTERNAL_MESSAGE: &str = "internal server error";

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Caller-supplied data failed validation (HTTP 400).
    InvalidInput(String),
    /// No credential, or one that could not be verified (HTTP 401).
    Unauthenticated(String),
    /// A valid identity proof was rejected by a finer-grained check,
    /// such as a wrong password (HTTP 403).
    Forbidden(String),
    /// The referenced resource does not exist (HTTP 404).
    NotFound(String),
    /// Failure reported by the store (HTTP 500).
    Database(String),
    /// Any other unexpected server-side failure (HTTP 500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            AppError::Unauthenticated(msg) => write!(f, "Unauthenticated: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Database(msg) => write!(f, "Database Error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::InvalidInput(msg)
            | AppError::Unauthenticated(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => msg.as_str(),
            // The detail stays in the server log; the caller only learns that it failed.
            AppError::Database(_) | AppError::Internal(_) => {
                log::error!("{}", self);
                INTERNAL_MESSAGE
            }
        };

        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `RowNotFound` becomes `AppError::NotFound`; everything else is a store failure.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("record not found".into()),
            _ => AppError::Database(error.to_string()),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::InvalidInput`.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::InvalidInput(error.to_string())
    }
}

/// Converts `jsonwebtoken::errors::Error` into `AppError::Unauthenticated`.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        log::debug!("token rejected: {:?}", error.kind());
        AppError::Unauthenticated("invalid token".into())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::Internal`.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(format!("password hashing failed: {}", error))
    }
}

/// A blocking task (password hashing) panicked or was cancelled.
impl From<tokio::task::JoinError> for AppError {
    fn from(error: tokio::task::JoinError) -> AppError {
        AppError::Internal(format!("blocking task failed: {}", error))
    }
}
