//! Prints every registered user. Password hashes are never shown.

use std::env;
use std::process::ExitCode;

use tareas::store::{PgStore, Store};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let database_url = match env::var("DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            log::error!("DATABASE_URL must be set");
            return ExitCode::FAILURE;
        }
    };

    let store = match PgStore::connect(&database_url, 1).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let users = match store.list_users().await {
        Ok(users) => users,
        Err(e) => {
            log::error!("failed to list users: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{} user(s) registered", users.len());
    for user in users {
        println!(
            "- id: {} | username: {} | created: {}",
            user.id,
            user.username,
            user.created_at.to_rfc3339()
        );
    }

    store.pool().close().await;
    ExitCode::SUCCESS
}
