//! User service
//!
//! Syncs identity-provider profiles into the local user table.

use tracing::{info, instrument};

use pantry_core::entities::UserProfile;
use pantry_core::DomainError;

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Upsert the session profile into the user table and return the stored
    /// row. The role is never overwritten by a profile refresh.
    #[instrument(skip(self, profile), fields(user_id = %profile.id))]
    pub async fn sync_user(&self, profile: &UserProfile) -> ServiceResult<UserResponse> {
        let user = self.ctx.user_repo().upsert(profile).await?;
        info!(user_id = %user.id, "User profile synced");
        Ok(UserResponse::from(&user))
    }
}
