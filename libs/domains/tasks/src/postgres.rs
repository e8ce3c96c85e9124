use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::OnConflict,
};
use uuid::Uuid;

use crate::{
    entity,
    error::TaskResult,
    models::{Task, TaskStatus},
    repository::TaskRepository,
};

/// PostgreSQL-backed store over the `tasks` table
#[derive(Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    /// Single `INSERT .. ON CONFLICT (id) DO UPDATE`; the stored creation
    /// date is never overwritten.
    async fn save(&self, task: Task) -> TaskResult<Task> {
        let active_model: entity::ActiveModel = task.clone().into();

        entity::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(entity::Column::Id)
                    .update_columns([
                        entity::Column::Title,
                        entity::Column::Description,
                        entity::Column::UpdateDate,
                        entity::Column::Status,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        tracing::debug!(task_id = %task.id, "Saved task");
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::CreationDate)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Status.eq(status))
            .order_by_asc(entity::Column::CreationDate)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
