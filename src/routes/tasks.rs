use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{CreatedTask, TaskTextInput},
    services::tasks,
    store::Store,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

/// Lists the authenticated user's tasks.
///
/// ## Responses:
/// - `200 OK`: JSON array of `Task` objects, oldest first (possibly empty).
#[get("/tareas")]
pub async fn list_tasks(
    store: web::Data<dyn Store>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = tasks::list(store.get_ref(), user.id()).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task owned by the authenticated user.
///
/// The owner always comes from the session token.
///
/// ## Responses:
/// - `201 Created`: `{"id": "<uuid>"}`.
/// - `400 Bad Request`: missing or blank `tarea`.
#[post("/tareas/nueva")]
pub async fn create_task(
    store: web::Data<dyn Store>,
    user: AuthenticatedUser,
    task_data: web::Json<TaskTextInput>,
) -> Result<impl Responder, AppError> {
    let task = tasks::create(store.get_ref(), user.id(), &task_data.text).await?;
    Ok(HttpResponse::Created().json(CreatedTask { id: task.id }))
}

/// Deletes a task by its ID.
///
/// ## Responses:
/// - `204 No Content`: on successful deletion.
/// - `400 Bad Request`: the id is not a valid task id.
/// - `404 Not Found`: no task has that id.
#[delete("/tareas/borrar/{id}")]
pub async fn delete_task(
    store: web::Data<dyn Store>,
    _user: AuthenticatedUser,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = tasks::parse_task_id(&task_id)?;
    tasks::delete(store.get_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Replaces a task's text.
///
/// ## Responses:
/// - `204 No Content`: on success.
/// - `400 Bad Request`: invalid id, or missing/blank `tarea`.
/// - `404 Not Found`: no task has that id.
#[put("/tareas/actualizar/texto/{id}")]
pub async fn update_task_text(
    store: web::Data<dyn Store>,
    _user: AuthenticatedUser,
    task_id: web::Path<String>,
    task_data: web::Json<TaskTextInput>,
) -> Result<impl Responder, AppError> {
    let id = tasks::parse_task_id(&task_id)?;
    tasks::edit_text(store.get_ref(), id, &task_data.text).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Flips a task between pending and done.
///
/// ## Responses:
/// - `204 No Content`: on success.
/// - `400 Bad Request`: the id is not a valid task id.
/// - `404 Not Found`: no task has that id.
#[put("/tareas/actualizar/estado/{id}")]
pub async fn toggle_task_state(
    store: web::Data<dyn Store>,
    _user: AuthenticatedUser,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = tasks::parse_task_id(&task_id)?;
    tasks::toggle_state(store.get_ref(), id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Fallback for every unmatched path behind the authorization gate.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("resource not found".into()))
}
