//! Session user handlers

use axum::{extract::State, Json};
use pantry_service::{UserResponse, UserService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the session user, upserting the profile carried in the token
///
/// GET /api/auth/user
pub async fn get_session_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.sync_user(&auth.profile()).await?;
    Ok(Json(response))
}
