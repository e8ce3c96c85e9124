use std::sync::{Arc, RwLock};

use argon2::{
    Argon2,
    password_hash::{
        Output, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::config::BasicAuthConfig;
use crate::extractors::Localizer;
use crate::i18n::Catalog;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to hash the configured password: {0}")]
    Hashing(String),

    #[error("Invalid authentication realm '{0}'")]
    InvalidRealm(String),
}

/// Name of the caller, inserted into request extensions after a
/// successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

struct Credentials {
    username: String,
    password_hash: String,
    challenge: HeaderValue,
    /// SHA-256 of the last pair that passed the argon2 check
    accepted: RwLock<Option<Output>>,
}

impl Credentials {
    fn check(&self, username: &str, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            tracing::error!("Stored password hash is malformed");
            return false;
        };

        // Always run the hash check so a wrong user name costs the same as a wrong password.
        let password_ok = Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();

        password_ok && username == self.username
    }

    fn is_accepted(&self, fingerprint: &Output) -> bool {
        self.accepted
            .read()
            .map(|accepted| accepted.as_ref() == Some(fingerprint))
            .unwrap_or(false)
    }

    fn remember(&self, fingerprint: Output) {
        if let Ok(mut accepted) = self.accepted.write() {
            *accepted = Some(fingerprint);
        }
    }
}

/// `Output` compares in constant time.
fn fingerprint(username: &str, password: &str) -> Option<Output> {
    let digest = Sha256::new()
        .chain_update((username.len() as u64).to_le_bytes())
        .chain_update(username)
        .chain_update(password)
        .finalize();
    Output::new(&digest).ok()
}

/// Router state for [`basic_auth_middleware`].
///
/// Only the argon2 hash of the configured password is kept. A request that
/// repeats the last accepted pair skips argon2; any other pair is checked on
/// the blocking pool.
#[derive(Clone)]
pub struct BasicAuth {
    credentials: Arc<Credentials>,
    catalog: Arc<Catalog>,
}

impl BasicAuth {
    pub fn new(config: &BasicAuthConfig, catalog: Arc<Catalog>) -> Result<Self, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(config.password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .to_string();

        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{}\"", config.realm))
            .map_err(|_| AuthError::InvalidRealm(config.realm.clone()))?;

        Ok(Self {
            credentials: Arc::new(Credentials {
                username: config.username.clone(),
                password_hash,
                challenge,
                accepted: RwLock::new(None),
            }),
            catalog,
        })
    }

    /// Checks a username/password pair against the configured credential.
    pub async fn verify(&self, username: &str, password: &str) -> bool {
        let fingerprint = fingerprint(username, password);
        if let Some(fingerprint) = &fingerprint {
            if self.credentials.is_accepted(fingerprint) {
                return true;
            }
        }

        let credentials = self.credentials.clone();
        let (username, password) = (username.to_owned(), password.to_owned());
        let checked =
            tokio::task::spawn_blocking(move || credentials.check(&username, &password)).await;

        match checked {
            Ok(true) => {
                if let Some(fingerprint) = fingerprint {
                    self.credentials.remember(fingerprint);
                }
                true
            }
            Ok(false) => false,
            Err(e) => {
                tracing::error!(error = %e, "Password check task failed");
                false
            }
        }
    }

    fn reject(&self, headers: &HeaderMap) -> Response {
        let mut response = Localizer::from_headers(self.catalog.clone(), headers)
            .unauthorized()
            .into_response();
        response.headers_mut().insert(
            header::WWW_AUTHENTICATE,
            self.credentials.challenge.clone(),
        );
        response
    }
}

/// Basic authentication middleware.
///
/// Rejects with 401 and a `WWW-Authenticate` challenge when the header is
/// missing, uses another scheme, or carries wrong credentials.
///
/// # Example
///
/// ```ignore
/// let protected_routes = Router::new()
///     .route("/tasks", get(list_tasks))
///     .layer(axum::middleware::from_fn_with_state(auth.clone(), basic_auth_middleware));
/// ```
pub async fn basic_auth_middleware(
    State(auth): State<BasicAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(Authorization(basic)) = headers.typed_get::<Authorization<Basic>>() else {
        tracing::debug!("No Basic credentials in Authorization header");
        return auth.reject(&headers);
    };

    if !auth.verify(basic.username(), basic.password()).await {
        tracing::info!(username = %basic.username(), "Rejected Basic credentials");
        return auth.reject(&headers);
    }

    request
        .extensions_mut()
        .insert(AuthenticatedUser(basic.username().to_string()));
    next.run(request).await
}
