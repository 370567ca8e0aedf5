//! # pantry-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `pantry-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pantry_db::pool::{create_pool, DatabaseConfig};
//! use pantry_db::PgInventoryRepository;
//! use pantry_core::traits::InventoryRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let inventory_repo = PgInventoryRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgActivityLogRepository, PgDashboardRepository, PgDistributionRepository,
    PgDonationRepository, PgInventoryRepository, PgUserRepository,
};
