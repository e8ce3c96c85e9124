use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{Task, TaskStatus};

/// Persistence boundary for tasks.
///
/// Each call touches a single row; callers get no isolation across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert, or overwrite the row with the same id
    async fn save(&self, task: Task) -> TaskResult<Task>;

    async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// All tasks, oldest first
    async fn find_all(&self) -> TaskResult<Vec<Task>>;

    async fn find_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>>;

    /// Returns whether a row was removed
    async fn delete_by_id(&self, id: Uuid) -> TaskResult<bool>;
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn oldest_first(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| {
        a.creation_date
            .cmp(&b.creation_date)
            .then_with(|| a.id.cmp(&b.id))
    });
    tasks
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: Task) -> TaskResult<Task> {
        self.tasks.write().await.insert(task.id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().await.values().cloned().collect();
        Ok(oldest_first(tasks))
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskResult<Vec<Task>> {
        let tasks = self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| t.status == status)
            .cloned()
            .collect();
        Ok(oldest_first(tasks))
    }

    async fn delete_by_id(&self, id: Uuid) -> TaskResult<bool> {
        Ok(self.tasks.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.save(Task::new("Buy coffee", None)).await.unwrap();

        let found = repo.find_by_id(task.id).await.unwrap();
        assert_eq!(found, Some(task));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites_by_id() {
        let repo = InMemoryTaskRepository::new();
        let mut task = repo.save(Task::new("Buy coffee", None)).await.unwrap();

        task.title = "Buy tea".to_string();
        repo.save(task.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Buy tea");
    }

    #[tokio::test]
    async fn test_find_by_status() {
        let repo = InMemoryTaskRepository::new();
        repo.save(Task::new("open", None)).await.unwrap();
        let mut done = Task::new("done", None);
        done.status = TaskStatus::Completed;
        repo.save(done.clone()).await.unwrap();

        let completed = repo.find_by_status(TaskStatus::Completed).await.unwrap();
        assert_eq!(completed, vec![done]);
        assert_eq!(repo.find_by_status(TaskStatus::Pending).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryTaskRepository::new();
        let task = repo.save(Task::new("Buy coffee", None)).await.unwrap();

        assert!(repo.delete_by_id(task.id).await.unwrap());
        assert!(!repo.delete_by_id(task.id).await.unwrap());
    }
}
