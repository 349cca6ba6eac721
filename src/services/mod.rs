//! Operations behind the HTTP handlers.
//!
//! Services take the store and the auth primitives as plain references, so the
//! same code runs under the server, the admin tool and the tests.

pub mod accounts;
pub mod tasks;
