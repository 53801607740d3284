//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use erp_common::{AppConfig, AppError, JwtService};
use erp_db::{
    create_pool, default_migrations_dir, run_migrations, PgAttributeRepository,
    PgCategoryRepository, PgLinkRepository, PgPool, PgProductAttributeRepository,
    PgProductRepository, PgShopRepository, PgSupplierRepository, PgUserRepository,
};
use erp_service::{seed_admin, ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    Ok(router.with_state(state))
}

/// Wire the PostgreSQL repositories and credential services into a service context
pub fn build_service_context(pool: PgPool, config: &AppConfig) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .supplier_repo(Arc::new(PgSupplierRepository::new(pool.clone())))
        .shop_repo(Arc::new(PgShopRepository::new(pool.clone())))
        .product_repo(Arc::new(PgProductRepository::new(pool.clone())))
        .category_repo(Arc::new(PgCategoryRepository::new(pool.clone())))
        .link_repo(Arc::new(PgLinkRepository::new(pool.clone())))
        .attribute_repo(Arc::new(PgAttributeRepository::new(pool.clone())))
        .product_attribute_repo(Arc::new(PgProductAttributeRepository::new(pool)))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Migrations directory: `MIGRATIONS_DIR` when set, else the one shipped with `erp-db`
fn migrations_dir(config: &AppConfig) -> PathBuf {
    config
        .database
        .migrations_dir
        .clone()
        .unwrap_or_else(default_migrations_dir)
}

/// Initialize all dependencies and create AppState
///
/// Connects to PostgreSQL, applies pending migrations and seeds the first
/// administrator when configured.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = erp_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let migrations = migrations_dir(&config);
    info!(dir = %migrations.display(), "Applying migrations");
    run_migrations(&pool, &migrations)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let service_context = build_service_context(pool, &config)?;

    let seeded = seed_admin(&service_context, &config.seed)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;
    if seeded {
        info!(name = %config.seed.admin_name, "Seeded administrator account");
    }

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl-C or SIGTERM
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on the first shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}
