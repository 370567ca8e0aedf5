//! PostgreSQL implementation of ActivityLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pantry_core::entities::{ActivityLog, NewActivityLog};
use pantry_core::traits::{ActivityLogRepository, RepoResult};

use crate::models::ActivityLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ActivityLogRepository
#[derive(Clone)]
pub struct PgActivityLogRepository {
    pool: PgPool,
}

impl PgActivityLogRepository {
    /// Create a new PgActivityLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityLogRepository for PgActivityLogRepository {
    #[instrument(skip(self, entry))]
    async fn append(&self, entry: &NewActivityLog, created_by: &str) -> RepoResult<ActivityLog> {
        let result = sqlx::query_as::<_, ActivityLogModel>(
            r#"
            INSERT INTO activity_log (action, entity_type, entity_id, description, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, action, entity_type, entity_id, description, created_at, created_by
            "#,
        )
        .bind(entry.action.as_str())
        .bind(entry.entity_type.as_str())
        .bind(entry.entity_id)
        .bind(&entry.description)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        ActivityLog::try_from(result)
    }

    #[instrument(skip(self))]
    async fn recent(&self, limit: i64) -> RepoResult<Vec<ActivityLog>> {
        let results = sqlx::query_as::<_, ActivityLogModel>(
            r#"
            SELECT id, action, entity_type, entity_id, description, created_at, created_by
            FROM activity_log
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(ActivityLog::try_from).collect()
    }
}
