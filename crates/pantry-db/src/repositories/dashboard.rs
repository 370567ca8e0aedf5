//! PostgreSQL implementation of DashboardRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use pantry_core::calendar::month_start;
use pantry_core::traits::{DashboardRepository, DashboardStats, RepoResult};
use pantry_core::EXPIRY_WINDOW_DAYS;

use super::error::map_db_error;

/// PostgreSQL implementation of DashboardRepository
#[derive(Clone)]
pub struct PgDashboardRepository {
    pool: PgPool,
}

impl PgDashboardRepository {
    /// Create a new PgDashboardRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for PgDashboardRepository {
    #[instrument(skip(self))]
    async fn stats(&self, now: DateTime<Utc>) -> RepoResult<DashboardStats> {
        let start_of_month = month_start(now);
        let today = now.date_naive();

        let total_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory_items")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let monthly_donations: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM donations WHERE donation_date >= $1")
                .bind(start_of_month)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        let families_served: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(registered_families), 0)
            FROM distribution_events
            WHERE status = 'completed' AND event_date >= $1
            "#,
        )
        .bind(start_of_month)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let upcoming_events: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM distribution_events WHERE status = 'scheduled' AND event_date >= $1",
        )
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let low_stock_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM inventory_items WHERE quantity <= low_stock_threshold",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let expiring_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM inventory_items WHERE expiry_date IS NOT NULL AND expiry_date <= $1 + $2",
        )
        .bind(today)
        .bind(i32::try_from(EXPIRY_WINDOW_DAYS).unwrap_or(i32::MAX))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(DashboardStats {
            total_items,
            monthly_donations,
            families_served,
            upcoming_events,
            low_stock_count,
            expiring_count,
        })
    }
}
