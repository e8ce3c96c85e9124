use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Creates a `PENDING` task with a fresh id.
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        input.validate()?;

        let task = self
            .repository
            .save(Task::new(input.title, input.description))
            .await?;

        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    pub async fn find_all_tasks(&self) -> TaskResult<Vec<Task>> {
        self.repository.find_all().await
    }

    pub async fn find_tasks_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>> {
        self.repository.find_by_status(status).await
    }

    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn find_task_by_id(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// Replaces the supplied fields and refreshes `update_date`.
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        input.validate()?;

        let mut task = self.find_task_by_id(id).await?;
        task.apply_update(input);

        let task = self.repository.save(task).await?;
        tracing::info!(status = %task.status, "Updated task");
        Ok(task)
    }

    /// Fails with `NotFound` when the task does not exist, including on a
    /// second delete of the same id.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        self.find_task_by_id(id).await?;

        if !self.repository.delete_by_id(id).await? {
            return Err(TaskError::NotFound(id));
        }

        tracing::info!("Deleted task");
        Ok(())
    }
}
