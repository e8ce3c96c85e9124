//! Configuration for Basic authentication.

use std::fmt;

use core_config::{ConfigError, FromEnv, env_or_default, env_required};

pub const DEFAULT_REALM: &str = "todo-api";

/// The single user allowed to call protected routes.
///
/// Loaded from environment variables:
/// - `API_USERNAME` (required)
/// - `API_PASSWORD` (required, non-empty)
/// - `AUTH_REALM` (default: `todo-api`)
#[derive(Clone)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl BasicAuthConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            realm: DEFAULT_REALM.to_string(),
        }
    }

    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }
}

impl fmt::Debug for BasicAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("realm", &self.realm)
            .finish()
    }
}

impl FromEnv for BasicAuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let username = env_required("API_USERNAME")?;
        let password = env_required("API_PASSWORD")?;

        if username.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_USERNAME".to_string(),
                details: "must not be blank".to_string(),
            });
        }
        if password.is_empty() {
            return Err(ConfigError::ParseError {
                key: "API_PASSWORD".to_string(),
                details: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            username,
            password,
            realm: env_or_default("AUTH_REALM", DEFAULT_REALM),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_valid() {
        temp_env::with_vars(
            [
                ("API_USERNAME", Some("admin")),
                ("API_PASSWORD", Some("s3cret")),
                ("AUTH_REALM", None),
            ],
            || {
                let config = BasicAuthConfig::from_env().unwrap();
                assert_eq!(config.username, "admin");
                assert_eq!(config.password, "s3cret");
                assert_eq!(config.realm, DEFAULT_REALM);
            },
        );
    }

    #[test]
    fn test_from_env_missing_password() {
        temp_env::with_vars(
            [("API_USERNAME", Some("admin")), ("API_PASSWORD", None)],
            || {
                let err = BasicAuthConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("API_PASSWORD"));
            },
        );
    }

    #[test]
    fn test_from_env_empty_password() {
        temp_env::with_vars(
            [("API_USERNAME", Some("admin")), ("API_PASSWORD", Some(""))],
            || {
                let err = BasicAuthConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("must not be empty"));
            },
        );
    }

    #[test]
    fn test_custom_realm() {
        temp_env::with_vars(
            [
                ("API_USERNAME", Some("admin")),
                ("API_PASSWORD", Some("s3cret")),
                ("AUTH_REALM", Some("tasks")),
            ],
            || {
                assert_eq!(BasicAuthConfig::from_env().unwrap().realm, "tasks");
            },
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = BasicAuthConfig::new("admin", "s3cret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("admin"));
    }
}
