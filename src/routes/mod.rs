pub mod auth;
pub mod tasks;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::{auth::AuthMiddleware, error::AppError};

/// Registers every route of the API.
///
/// The public `/login` and `/registro` routes come first. Everything after
/// them, including the not-found fallback, sits inside one scope wrapped by
/// `AuthMiddleware`, so no task route can be reached without a verified token.
///
/// Expects `web::Data<dyn Store>`, `web::Data<PasswordHasher>` and
/// `web::Data<TokenService>` to be registered on the `App`.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(auth::login)
        .service(auth::register)
        .service(
            web::scope("")
                .wrap(AuthMiddleware)
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(tasks::delete_task)
                .service(tasks::update_task_text)
                .service(tasks::toggle_task_state)
                .default_service(web::to(tasks::not_found)),
        );
}

/// Reports unreadable JSON bodies (syntax errors, missing fields) as `InvalidInput`.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InvalidInput(format!("invalid request body: {}", err)).into()
}
