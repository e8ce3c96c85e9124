//! # Axum Helpers
//!
//! Utilities, middleware, and helpers shared by the HTTP services.
//!
//! ## Modules
//!
//! - **[`auth`]**: HTTP Basic authentication against a configured credential
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Error taxonomy and the JSON error body
//! - **[`extractors`]**: Validated JSON, query string, UUID path, per-request localizer
//! - **[`i18n`]**: Message catalog and locale negotiation
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum::Router;
//! use axum_helpers::{i18n::{Catalog, Locale}, server::{create_production_app, create_router}};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let catalog = Arc::new(Catalog::new(Locale::En));
//!     let router = create_router::<ApiDoc>(Router::new(), Router::new(), catalog, None);
//!
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod auth;
pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod i18n;
pub mod server;

pub use auth::{AuthenticatedUser, BasicAuth, BasicAuthConfig, basic_auth_middleware};

pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};

pub use http::{create_cors_layer, parse_allowed_origins, security_headers};

pub use envelope::{ApiResponse, MessageResponse};
pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{Localizer, QueryParams, UuidPath, ValidatedJson};

pub use i18n::{Catalog, Locale};
