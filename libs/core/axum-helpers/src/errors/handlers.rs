use axum::response::{IntoResponse, Response};

use super::AppError;
use crate::extractors::Localizer;
use crate::i18n::keys;

/// Fallback handler for unknown routes.
pub async fn not_found(l10n: Localizer) -> Response {
    AppError::NotFound(l10n.text(keys::ROUTE_NOT_FOUND, &[])).into_response()
}
