//! Application state
//!
//! Holds the shared state for the Axum application including the service
//! context, session verification and configuration.

use std::sync::Arc;

use pantry_common::{AppConfig, SessionService};
use pantry_db::PgPool;
use pantry_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all repository dependencies
    service_context: Arc<ServiceContext>,
    /// Bearer session token verification
    session_service: Arc<SessionService>,
    /// Database pool, held for the readiness probe
    pool: PgPool,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        session_service: Arc<SessionService>,
        pool: PgPool,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            session_service,
            pool,
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the session service
    pub fn session_service(&self) -> &SessionService {
        &self.session_service
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
