//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pantry_common::{AppConfig, AppError, SessionService};
use pantry_db::{
    create_pool, run_migrations, PgActivityLogRepository, PgDashboardRepository,
    PgDistributionRepository, PgDonationRepository, PgInventoryRepository, PgUserRepository,
};
use pantry_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
/// Health routes are merged after the middleware stack so probes bypass
/// rate limiting.
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let router = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = pantry_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create session service
    let session_service = Arc::new(SessionService::new(
        &config.session.secret,
        config.session.ttl_seconds,
    ));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let inventory_repo = Arc::new(PgInventoryRepository::new(pool.clone()));
    let donation_repo = Arc::new(PgDonationRepository::new(pool.clone()));
    let distribution_repo = Arc::new(PgDistributionRepository::new(pool.clone()));
    let activity_repo = Arc::new(PgActivityLogRepository::new(pool.clone()));
    let dashboard_repo = Arc::new(PgDashboardRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .inventory_repo(inventory_repo)
        .donation_repo(donation_repo)
        .distribution_repo(distribution_repo)
        .activity_repo(activity_repo)
        .dashboard_repo(dashboard_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, session_service, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
