use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use crate::i18n::Catalog;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the top-level router with documentation and common middleware.
///
/// This function sets up:
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - `public` routes (health, readiness) at the root
/// - Localized JSON 404 fallback
/// - Request tracing, security headers, optional CORS, compression
///
/// Every route passed in gets the layers; anything merged onto the returned
/// router afterwards does not.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Arguments
/// * `apis` - Router with all API routes (state already applied)
/// * `public` - Routes served outside `/api`, e.g. `health_router()`
/// * `catalog` - Messages used by the fallback handler
/// * `cors` - CORS layer, or `None` to leave CORS headers off
pub fn create_router<T>(
    apis: Router,
    public: Router,
    catalog: Arc<Catalog>,
    cors: Option<CorsLayer>,
) -> Router
where
    T: OpenApi + 'static,
{
    let fallback = Router::new().fallback(not_found).with_state(catalog);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .merge(public)
        .fallback_service(fallback)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = match cors {
        Some(cors) => router.layer(cors),
        None => router,
    };

    // gzip, br, deflate, zstd based on Accept-Encoding
    router.layer(CompressionLayer::new())
}

/// Serves `router` until SIGINT/SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts; `cleanup` is
/// abandoned once `shutdown_timeout` elapses.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
///
/// # Example
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
///
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
