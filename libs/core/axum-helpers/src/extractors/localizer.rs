//! Per-request access to the message catalog.

use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use validator::ValidationErrors;

use crate::errors::AppError;
use crate::i18n::{Catalog, Locale, keys};

/// Catalog bound to the locale negotiated for the current request.
///
/// The router state must expose an `Arc<Catalog>` through `FromRef`.
///
/// # Example
/// ```ignore
/// async fn hello(l10n: Localizer) -> String {
///     l10n.text("greeting", &[&"world"])
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Localizer {
    catalog: Arc<Catalog>,
    locale: Locale,
}

impl Localizer {
    pub fn new(catalog: Arc<Catalog>, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    /// Uses `Accept-Language`, falling back to the catalog default.
    pub fn from_headers(catalog: Arc<Catalog>, headers: &HeaderMap) -> Self {
        let locale = Locale::from_headers(headers).unwrap_or(catalog.default_locale());
        Self { catalog, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self, key: &str, args: &[&dyn Display]) -> String {
        self.catalog.message(self.locale, key, args)
    }

    /// 400 naming the parameter and the value that failed to convert.
    pub fn type_mismatch(&self, param: &str, value: &str) -> AppError {
        AppError::TypeMismatch(self.text(keys::TYPE_MISMATCH, &[&param, &value]))
    }

    /// 400 with one `"field: message"` entry per failed rule.
    ///
    /// A rule's `code` is looked up in the catalog; unknown codes fall back to
    /// the rule's own message, then to the code.
    pub fn validation_error(&self, errors: &ValidationErrors) -> AppError {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |err| {
                    let message = match self.catalog.template(self.locale, &err.code) {
                        Some(_) => self.text(&err.code, &[]),
                        None => err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string()),
                    };
                    format!("{field}: {message}")
                })
            })
            .collect();
        details.sort();
        details.dedup();

        AppError::Validation {
            message: self.text(keys::VALIDATION_FAILED, &[]),
            details,
        }
    }

    pub fn unauthorized(&self) -> AppError {
        AppError::Unauthorized(self.text(keys::AUTH_INVALID_CREDENTIALS, &[]))
    }
}

impl<S> FromRequestParts<S> for Localizer
where
    Arc<Catalog>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(Arc::<Catalog>::from_ref(state), &parts.headers))
    }
}
