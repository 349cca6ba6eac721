use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

use tareas::{
    auth::{PasswordHasher, TokenService},
    config::Config,
    routes,
    services::accounts,
    store::{PgStore, Store},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let store = PgStore::connect(&config.database_url, config.max_connections)
        .await
        .map_err(|e| {
            log::error!("failed to connect to database: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;
    store.migrate().await.map_err(|e| {
        log::error!("failed to run migrations: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    log::info!(
        "connected to database (pool of {} connections)",
        config.max_connections
    );

    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let store: Arc<dyn Store> = Arc::new(store);

    if let Some(seed) = &config.seed_user {
        match accounts::register(store.as_ref(), &hasher, &seed.username, &seed.password).await {
            Ok(true) => log::info!("seed user {} created", seed.username),
            Ok(false) => log::info!("seed user {} already exists", seed.username),
            Err(e) => log::error!("failed to create seed user {}: {}", seed.username, e),
        }
    }

    let store = web::Data::from(store);
    let hasher = web::Data::new(hasher);
    let tokens = web::Data::new(TokenService::new(&config.jwt_secret, config.token_ttl));

    match config.token_ttl {
        Some(ttl) => log::info!("session tokens expire after {} hours", ttl.num_hours()),
        None => log::info!("session tokens do not expire"),
    }
    log::info!("Starting tareas server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(hasher.clone())
            .app_data(tokens.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
