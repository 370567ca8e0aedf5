//! Dashboard handlers
//!
//! Summary statistics, the recent-activity feed and attention alerts.

use axum::{
    extract::{Query, State},
    Json,
};
use pantry_service::{
    ActivityLogResponse, AlertResponse, DashboardService, DashboardStatsResponse,
    RecentActivityQuery,
};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get dashboard statistics
///
/// GET /api/dashboard/stats
pub async fn get_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<DashboardStatsResponse>> {
    let service = DashboardService::new(state.service_context());
    let response = service.stats().await?;
    Ok(Json(response))
}

/// Get recent activity, newest first
///
/// GET /api/dashboard/recent-activity
pub async fn get_recent_activity(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<RecentActivityQuery>,
) -> ApiResult<Json<Vec<ActivityLogResponse>>> {
    let service = DashboardService::new(state.service_context());
    let response = service.recent_activity(&query).await?;
    Ok(Json(response))
}

/// Get attention alerts
///
/// GET /api/dashboard/alerts
pub async fn get_alerts(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<AlertResponse>>> {
    let service = DashboardService::new(state.service_context());
    let response = service.alerts().await?;
    Ok(Json(response))
}
