use axum::{
    Json, Router,
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiResponse, AppError, Catalog, Localizer, MessageResponse, QueryParams, UuidPath,
    ValidatedJson,
    errors::responses::{
        BadRequestTypeMismatchResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::messages::keys;
use crate::models::{CreateTask, TaskResponse, TaskStatus, UpdateTask, UpdateTaskQuery};
use crate::repository::TaskRepository;
use crate::service::TaskService;

pub const TAG: &str = "tasks";

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(
        schemas(TaskResponse, TaskStatus, CreateTask, UpdateTask, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestTypeMismatchResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "To-do task management")
    )
)]
pub struct ApiDoc;

/// Router state: the service plus the message catalog.
pub struct TaskApiState<R: TaskRepository> {
    pub service: Arc<TaskService<R>>,
    pub catalog: Arc<Catalog>,
}

impl<R: TaskRepository> TaskApiState<R> {
    pub fn new(service: TaskService<R>, catalog: Arc<Catalog>) -> Self {
        Self {
            service: Arc::new(service),
            catalog,
        }
    }
}

impl<R: TaskRepository> Clone for TaskApiState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<R: TaskRepository> FromRef<TaskApiState<R>> for Arc<Catalog> {
    fn from_ref(state: &TaskApiState<R>) -> Self {
        Arc::clone(&state.catalog)
    }
}

/// Task routes, relative to where they are nested.
///
/// `catalog` must contain [`crate::TASK_MESSAGES`].
pub fn router<R: TaskRepository + 'static>(
    service: TaskService<R>,
    catalog: Arc<Catalog>,
) -> Router {
    Router::new()
        .route("/", get(list_tasks::<R>).post(create_task::<R>))
        .route(
            "/{id}",
            get(get_task::<R>)
                .put(update_task::<R>)
                .delete(delete_task::<R>),
        )
        .with_state(TaskApiState::new(service, catalog))
}

/// List all tasks, oldest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "All tasks", body = Vec<TaskResponse>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(state): State<TaskApiState<R>>,
    l10n: Localizer,
) -> Result<Json<Vec<TaskResponse>>, AppError> {
    let tasks = state
        .service
        .find_all_tasks()
        .await
        .map_err(|e| e.localize(&l10n))?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Create a task
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    security(("basic_auth" = [])),
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = ApiResponse<TaskResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(state): State<TaskApiState<R>>,
    l10n: Localizer,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> Result<impl IntoResponse, AppError> {
    let task = state
        .service
        .create_task(input)
        .await
        .map_err(|e| e.localize(&l10n))?;

    let message = l10n.text(keys::CREATED, &[&task.title]);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(message, TaskResponse::from(task))),
    ))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    security(("basic_auth" = [])),
    params(
        ("id" = uuid::Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 400, response = BadRequestTypeMismatchResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<R: TaskRepository>(
    State(state): State<TaskApiState<R>>,
    l10n: Localizer,
    UuidPath(id): UuidPath,
) -> Result<Json<TaskResponse>, AppError> {
    let task = state
        .service
        .find_task_by_id(id)
        .await
        .map_err(|e| e.localize(&l10n))?;

    Ok(Json(task.into()))
}

/// Update a task
///
/// Body fields that are omitted keep their value. The status comes from the
/// query string.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    security(("basic_auth" = [])),
    params(
        ("id" = uuid::Uuid, Path, description = "Task ID"),
        UpdateTaskQuery
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated", body = ApiResponse<TaskResponse>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<R: TaskRepository>(
    State(state): State<TaskApiState<R>>,
    l10n: Localizer,
    UuidPath(id): UuidPath,
    QueryParams(query): QueryParams<UpdateTaskQuery>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> Result<Json<ApiResponse<TaskResponse>>, AppError> {
    let status = parse_status(&l10n, query.status.as_deref())?;

    let task = state
        .service
        .update_task(id, input.with_status(status))
        .await
        .map_err(|e| e.localize(&l10n))?;

    let message = l10n.text(keys::UPDATED, &[&task.id]);
    Ok(Json(ApiResponse::new(message, task.into())))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    security(("basic_auth" = [])),
    params(
        ("id" = uuid::Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = MessageResponse),
        (status = 400, response = BadRequestTypeMismatchResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(state): State<TaskApiState<R>>,
    l10n: Localizer,
    UuidPath(id): UuidPath,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .service
        .delete_task(id)
        .await
        .map_err(|e| e.localize(&l10n))?;

    Ok(Json(MessageResponse::new(l10n.text(keys::DELETED, &[&id]))))
}

/// Blank means "not supplied"; anything else must name a status.
fn parse_status(l10n: &Localizer, raw: Option<&str>) -> Result<Option<TaskStatus>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| l10n.type_mismatch("status", value)),
    }
}
