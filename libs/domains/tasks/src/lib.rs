//! Tasks Domain
//!
//! To-do items with a title, an optional description, a status and two
//! timestamps.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP routes, localized responses
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use axum_helpers::{Catalog, Locale};
//! use domain_tasks::{handlers, PgTaskRepository, TaskService, TASK_MESSAGES};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//!
//! let catalog = Arc::new(Catalog::new(Locale::En).with_messages(TASK_MESSAGES));
//! let service = TaskService::new(PgTaskRepository::new(db));
//! let routes = handlers::router(service, catalog);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{TaskError, TaskResult};
pub use handlers::{ApiDoc, TaskApiState};
pub use messages::TASK_MESSAGES;
pub use models::{CreateTask, Task, TaskResponse, TaskStatus, UpdateTask, UpdateTaskQuery};
pub use postgres::PgTaskRepository;
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
