use crate::{
    auth::{LoginRequest, LoginResponse, PasswordHasher, RegisterRequest, TokenService},
    error::AppError,
    services::accounts,
    store::Store,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Login user
///
/// Verifies the credentials and returns a session token.
///
/// ## Responses:
/// - `200 OK`: `{"token": "..."}`.
/// - `400 Bad Request`: missing or empty `usuario`/`password`.
/// - `401 Unauthorized`: unknown user.
/// - `403 Forbidden`: wrong password.
#[post("/login")]
pub async fn login(
    store: web::Data<dyn Store>,
    hasher: web::Data<PasswordHasher>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let token = accounts::login(
        store.get_ref(),
        &hasher,
        &tokens,
        &login_data.username,
        &login_data.password,
    )
    .await?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

/// Register a new user
///
/// Registering an existing username is accepted and changes nothing, so the
/// response never reveals whether the name was taken.
///
/// ## Responses:
/// - `204 No Content`: the user exists after the call.
/// - `400 Bad Request`: missing fields, or a username/password that fails validation.
#[post("/registro")]
pub async fn register(
    store: web::Data<dyn Store>,
    hasher: web::Data<PasswordHasher>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    accounts::register(
        store.get_ref(),
        &hasher,
        &register_data.username,
        &register_data.password,
    )
    .await?;

    Ok(HttpResponse::NoContent().finish())
}
