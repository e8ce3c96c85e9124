//! UUID path parameter extractor with automatic validation.

use std::sync::Arc;

use crate::errors::AppError;
use crate::extractors::Localizer;
use crate::i18n::Catalog;
use axum::{
    extract::{FromRef, FromRequestParts, RawPathParams},
    http::request::Parts,
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// A value that is not a UUID is rejected with a 400 naming the parameter
/// and the supplied value.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn get_task(UuidPath(id): UuidPath) -> String {
///     format!("Task ID: {}", id)
/// }
///
/// let app = Router::new().route("/tasks/{id}", get(get_task));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    Arc<Catalog>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let Some((name, value)) = params.iter().next() else {
            return Err(AppError::InternalServerError(
                "UuidPath used on a route without path parameters".to_string(),
            ));
        };

        Uuid::parse_str(value).map(UuidPath).map_err(|_| {
            Localizer::from_headers(Arc::<Catalog>::from_ref(state), &parts.headers)
                .type_mismatch(name, value)
        })
    }
}
