//! HTTP Basic authentication against a single configured credential.
//!
//! The credential is loaded once ([`BasicAuthConfig`]), hashed with argon2
//! ([`BasicAuth::new`]) and handed to the middleware as router state.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{BasicAuth, BasicAuthConfig, basic_auth_middleware};
//! use core_config::FromEnv;
//!
//! let config = BasicAuthConfig::from_env()?;
//! let auth = BasicAuth::new(&config, catalog)?;
//!
//! let protected = Router::new()
//!     .route("/tasks", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, basic_auth_middleware));
//! ```

pub mod basic;
pub mod config;

pub use basic::{AuthError, AuthenticatedUser, BasicAuth, basic_auth_middleware};
pub use config::BasicAuthConfig;
