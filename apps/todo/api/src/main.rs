use axum_helpers::{BasicAuth, create_cors_layer, create_production_app, parse_allowed_origins};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_tasks::{PgTaskRepository, TaskService};
use eyre::WrapErr;
use migration::Migrator;
use tracing::info;

use todo_api::config::Config;
use todo_api::{api, build_router, catalog};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment, config.app);

    let db = connect_from_config_with_retry(config.database.clone(), config.retry.clone())
        .await
        .wrap_err("PostgreSQL connection failed")?;

    run_migrations::<Migrator>(&db, config.app.name)
        .await
        .wrap_err("Failed to run migrations")?;

    let catalog = catalog(config.default_locale);
    let auth = BasicAuth::new(&config.auth, catalog.clone())
        .map_err(|e| eyre::eyre!("Failed to initialize Basic auth: {}", e))?;

    let cors = match &config.server.cors_allowed_origin {
        Some(origins) => {
            let origins = parse_allowed_origins(origins).wrap_err("Invalid CORS_ALLOWED_ORIGIN")?;
            info!("CORS enabled for {} origin(s)", origins.len());
            Some(create_cors_layer(origins))
        }
        None => None,
    };

    let service = TaskService::new(PgTaskRepository::new(db.clone()));

    // - /health: liveness check with app name/version
    // - /ready: readiness check with a database round trip
    let app = build_router(
        service,
        catalog,
        auth,
        cors,
        config.app,
        api::ready_router(db.clone()),
    );

    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        config.app.name, config.app.version, config.server.shutdown_timeout
    );

    create_production_app(
        app,
        &config.server,
        config.server.shutdown_timeout,
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("{} shutdown complete", config.app.name);
    Ok(())
}
