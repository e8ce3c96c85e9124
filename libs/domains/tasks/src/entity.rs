use crate::models::{Task, TaskStatus};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

/// Row of the `tasks` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub creation_date: DateTimeWithTimeZone,
    pub update_date: DateTimeWithTimeZone,
    pub status: TaskStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            creation_date: model.creation_date.into(),
            update_date: model.update_date.into(),
            status: model.status,
        }
    }
}

/// Every column set, usable for both insert and full update.
impl From<Task> for ActiveModel {
    fn from(task: Task) -> Self {
        ActiveModel {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            creation_date: Set(task.creation_date.into()),
            update_date: Set(task.update_date.into()),
            status: Set(task.status),
        }
    }
}
