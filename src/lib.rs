#![doc = "The `tareas` library crate."]
#![doc = ""]
#![doc = "Authentication (password hashing, session tokens, the authorization gate),"]
#![doc = "task ownership rules, the persistence port and the HTTP routes of the"]
#![doc = "tareas backend. The binaries in `src/main.rs` and `src/bin/` wire these"]
#![doc = "pieces to the environment."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use crate::error::AppError;
