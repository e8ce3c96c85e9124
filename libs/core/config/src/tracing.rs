use crate::{AppInfo, Environment};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install color-eyre with a project-standard configuration.
///
/// Call this first in `main()`. Safe to call multiple times.
///
/// - Shows file:line where errors occur
/// - Hides environment variables (they may hold credentials)
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default `EnvFilter` directives when `RUST_LOG` is unset.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,sqlx=warn,sea_orm=warn"
    } else {
        "debug,hyper=info,sqlx=warn"
    }
}

/// Initialize tracing with environment-aware output and span capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events, no targets
/// - **Development** (default): pretty multi-line output
///
/// Both install `tracing_error::ErrorLayer` so `eyre` reports carry span
/// traces. `RUST_LOG` overrides [`default_filter`].
///
/// Calling it again after a subscriber is installed is a no-op (tests do this).
///
/// ```ignore
/// use tracing::instrument;
/// use eyre::{Result, WrapErr};
///
/// #[instrument(skip(db), fields(task_id = %id))]
/// async fn load_task(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>> {
///     Entity::find_by_id(id)
///         .one(db)
///         .await
///         .wrap_err("Failed to fetch task")
/// }
/// ```
pub fn init_tracing(environment: &Environment, app: AppInfo) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!(
            app = app.name,
            version = app.version,
            environment = ?environment,
            "Tracing initialized"
        ),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
