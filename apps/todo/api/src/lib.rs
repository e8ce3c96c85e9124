//! To-do API
//!
//! Wires the tasks domain, Basic authentication, the message catalog and the
//! OpenAPI document into one router. `main` supplies the PostgreSQL
//! repository and the `/ready` route to [`build_router`].

use std::sync::Arc;

use axum::Router;
use axum_helpers::{BasicAuth, Catalog, Locale, create_router, health_router};
use core_config::AppInfo;
use domain_tasks::{TASK_MESSAGES, TaskRepository, TaskService};
use tower_http::cors::CorsLayer;

pub mod api;
pub mod config;
pub mod openapi;

/// Common messages plus the task messages.
pub fn catalog(default_locale: Locale) -> Arc<Catalog> {
    Arc::new(Catalog::new(default_locale).with_messages(TASK_MESSAGES))
}

/// The whole application router.
///
/// - `/api/v1/tasks/**` behind Basic auth
/// - `/health`, `/swagger-ui`, `/api-docs/openapi.json` public
/// - `extra_public` merged at the root, e.g. `/ready` which needs a live database
///
/// All of it shares the tracing, security header, CORS and compression layers.
pub fn build_router<R: TaskRepository + 'static>(
    service: TaskService<R>,
    catalog: Arc<Catalog>,
    auth: BasicAuth,
    cors: Option<CorsLayer>,
    app: AppInfo,
    extra_public: Router,
) -> Router {
    let api_routes = api::routes(service, catalog.clone(), auth);
    let public = health_router(app).merge(extra_public);

    create_router::<openapi::ApiDoc>(api_routes, public, catalog, cors)
}
