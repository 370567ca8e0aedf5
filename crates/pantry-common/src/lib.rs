//! # pantry-common
//!
//! Shared utilities including configuration, error handling, session
//! authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, SessionService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    RateLimitConfig, ServerConfig, SessionConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
