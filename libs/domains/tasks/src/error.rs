use axum_helpers::{AppError, Localizer};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::messages::keys;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl TaskError {
    /// Converts into an HTTP error with messages in the caller's locale.
    pub fn localize(self, l10n: &Localizer) -> AppError {
        match self {
            TaskError::NotFound(id) => AppError::NotFound(l10n.text(keys::NOT_FOUND, &[&id])),
            TaskError::Validation(errors) => l10n.validation_error(&errors),
            TaskError::Database(err) => AppError::Database(err),
        }
    }
}
