//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pantry_core::entities::{User, UserProfile};
use pantry_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, email, first_name, last_name, profile_image_url, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, profile: &UserProfile) -> RepoResult<User> {
        // Role is set on insert only; a later profile refresh must not
        // demote an admin back to volunteer.
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (id, email, first_name, last_name, profile_image_url)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                profile_image_url = EXCLUDED.profile_image_url,
                updated_at = NOW()
            RETURNING id, email, first_name, last_name, profile_image_url, role, created_at, updated_at
            "#,
        )
        .bind(&profile.id)
        .bind(&profile.email)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.profile_image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(User::from(result))
    }
}
