//! Custom extractors for Axum handlers.
//!
//! Every rejection is an [`AppError`](crate::errors::AppError) with a message
//! rendered through the request's [`Localizer`].

pub mod localizer;
pub mod query;
pub mod uuid_path;
pub mod validated_json;

pub use localizer::Localizer;
pub use query::QueryParams;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
