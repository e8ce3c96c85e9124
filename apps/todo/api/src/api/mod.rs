use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use axum_helpers::{BasicAuth, Catalog, basic_auth_middleware};
use domain_tasks::{TaskRepository, TaskService, handlers};
use sea_orm::DatabaseConnection;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Every route below requires Basic credentials.
pub fn routes<R: TaskRepository + 'static>(
    service: TaskService<R>,
    catalog: Arc<Catalog>,
    auth: BasicAuth,
) -> Router {
    Router::new()
        .nest("/v1/tasks", handlers::router(service, catalog))
        .route_layer(middleware::from_fn_with_state(auth, basic_auth_middleware))
}

/// Creates a router with the /ready endpoint that checks the database.
///
/// This router has state applied; pass it to `build_router` so it sits
/// behind the same layers as the rest of the app.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}
