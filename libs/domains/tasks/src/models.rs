use chrono::{DateTime, SubsecRound, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::messages::keys;

/// Current time at the precision PostgreSQL stores, so saved and reloaded
/// timestamps compare equal.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Rejects titles made only of whitespace.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(keys::TITLE_NOT_EMPTY));
    }
    Ok(())
}

/// Task status.
///
/// `PENDENTE` and `CONCLUIDA` are accepted as input aliases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "task_status")]
#[strum(ascii_case_insensitive)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "PENDING", alias = "PENDENTE")]
    #[strum(to_string = "PENDING", serialize = "PENDENTE")]
    #[sea_orm(string_value = "PENDING")]
    Pending,

    #[serde(rename = "COMPLETED", alias = "CONCLUIDA")]
    #[strum(to_string = "COMPLETED", serialize = "CONCLUIDA")]
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
    pub status: TaskStatus,
}

impl Task {
    /// New `PENDING` task with a fresh id; both timestamps share one instant.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        let now = now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.filter(|d| !d.is_empty()),
            creation_date: now,
            update_date: now,
            status: TaskStatus::Pending,
        }
    }

    /// Applies a partial update.
    ///
    /// Absent fields keep their value; an empty description clears it.
    /// `update_date` is always refreshed and never moves backwards.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = (!description.is_empty()).then_some(description);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.update_date = now().max(self.update_date);
    }
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    /// 1 to 100 characters, not blank
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, code = "task.title.not.empty"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Buy coffee", min_length = 1, max_length = 100)]
    pub title: String,

    /// At most 500 characters
    #[validate(length(max = 500, code = "task.description.size"))]
    #[schema(example = "Extra strong", max_length = 500)]
    pub description: Option<String>,
}

impl CreateTask {
    pub fn new(title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            title: title.into(),
            description: description.map(str::to_string),
        }
    }
}

/// Body of `PUT /tasks/{id}`. Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(
        length(min = 1, max = 100, code = "task.title.not.empty"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Buy coffee (done)", min_length = 1, max_length = 100)]
    pub title: Option<String>,

    /// An empty string clears the description
    #[validate(length(max = 500, code = "task.description.size"))]
    pub description: Option<String>,

    /// Taken from the `status` query parameter, never from the body
    #[serde(skip)]
    pub status: Option<TaskStatus>,
}

impl UpdateTask {
    pub fn with_status(mut self, status: Option<TaskStatus>) -> Self {
        self.status = status;
        self
    }
}

/// Query string of `PUT /tasks/{id}`.
///
/// `status` is kept raw so an unknown value can be reported by name.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateTaskQuery {
    /// `PENDING` or `COMPLETED` (case-insensitive)
    #[param(example = "COMPLETED")]
    pub status: Option<String>,
}

/// Task as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
    pub status: TaskStatus,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            creation_date: task.creation_date,
            update_date: task.update_date,
            status: task.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy coffee", Some("Extra strong".to_string()));

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.creation_date, task.update_date);
        assert_eq!(task.description.as_deref(), Some("Extra strong"));
        assert!(!task.id.is_nil());
    }

    #[test]
    fn test_new_task_drops_empty_description() {
        let task = Task::new("Buy coffee", Some(String::new()));
        assert_eq!(task.description, None);
    }

    #[test]
    fn test_apply_update_keeps_absent_fields() {
        let mut task = Task::new("Buy coffee", Some("Extra strong".to_string()));
        let before = task.clone();

        task.apply_update(UpdateTask::default().with_status(Some(TaskStatus::Completed)));

        assert_eq!(task.title, before.title);
        assert_eq!(task.description, before.description);
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.id, before.id);
        assert_eq!(task.creation_date, before.creation_date);
        assert!(task.update_date >= before.update_date);
    }

    #[test]
    fn test_apply_update_replaces_and_clears() {
        let mut task = Task::new("Buy coffee", Some("Extra strong".to_string()));

        task.apply_update(UpdateTask {
            title: Some("Buy tea".to_string()),
            description: Some(String::new()),
            status: None,
        });

        assert_eq!(task.title, "Buy tea");
        assert_eq!(task.description, None);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_status_parsing_accepts_aliases_in_any_case() {
        assert_eq!(TaskStatus::from_str("COMPLETED").unwrap(), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_str("completed").unwrap(), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_str("Concluida").unwrap(), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_str("pendente").unwrap(), TaskStatus::Pending);
        assert!(TaskStatus::from_str("DONE").is_err());
        assert_eq!(TaskStatus::Completed.to_string(), "COMPLETED");
    }

    #[test]
    fn test_status_json() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        let status: TaskStatus = serde_json::from_str("\"CONCLUIDA\"").unwrap();
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn test_create_task_validation() {
        assert!(CreateTask::new("Buy coffee", None).validate().is_ok());
        assert!(CreateTask::new("", None).validate().is_err());
        assert!(CreateTask::new("   ", None).validate().is_err());
        assert!(CreateTask::new("x".repeat(100), None).validate().is_ok());
        assert!(CreateTask::new("x".repeat(101), None).validate().is_err());

        let long = "d".repeat(501);
        let errors = CreateTask::new("ok", Some(&long)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn test_missing_title_is_a_validation_error() {
        let input: CreateTask = serde_json::from_str(r#"{"description":"no title"}"#).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_update_task_validates_only_supplied_fields() {
        assert!(UpdateTask::default().validate().is_ok());

        let blank = UpdateTask {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_update_body_ignores_status() {
        let input: UpdateTask =
            serde_json::from_str(r#"{"title":"t","status":"COMPLETED"}"#).unwrap();
        assert_eq!(input.status, None);
    }

    #[test]
    fn test_response_uses_camel_case() {
        let json = serde_json::to_value(TaskResponse::from(Task::new("a", None))).unwrap();
        assert!(json.get("creationDate").is_some());
        assert!(json.get("updateDate").is_some());
        assert_eq!(json["status"], "PENDING");
        assert!(json["description"].is_null());
    }
}
