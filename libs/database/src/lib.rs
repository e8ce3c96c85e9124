//! PostgreSQL connectivity shared by the services.
//!
//! # Features
//!
//! - `postgres` (default) - connection pool, migrations and health checks via SeaORM
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`] and [`common::RetryConfig`]
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use database::common::RetryConfig;
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, RetryConfig::from_env()?).await?;
//! postgres::run_migrations::<Migrator>(&db, "todo_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};
