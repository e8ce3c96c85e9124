//! JSON extractor with automatic validation using the validator crate.

use std::sync::Arc;

use crate::errors::AppError;
use crate::extractors::Localizer;
use crate::i18n::Catalog;
use axum::extract::{FromRef, FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body, then runs `Validate`. Failures become a 400 whose
/// `details` hold one localized `"field: message"` entry per failed rule.
/// Rule codes are resolved through the catalog, so attributes should carry
/// a catalog key as `code`.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateTask {
///     #[validate(length(min = 1, max = 100, code = "task.title.not.empty"))]
///     title: String,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateTask>) -> String {
///     payload.title
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    Arc<Catalog>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let l10n = Localizer::from_headers(Arc::<Catalog>::from_ref(state), req.headers());

        let Json(data) = Json::<T>::from_request(req, state).await?;

        data.validate().map_err(|e| l10n.validation_error(&e))?;

        Ok(ValidatedJson(data))
    }
}
