//! Distribution event handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use pantry_service::{
    CreateDistributionEventRequest, CreateDistributionItemRequest, DistributionEventResponse,
    DistributionItemResponse, DistributionService, ListEventsQuery,
    UpdateDistributionEventRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List distribution events, newest first
///
/// GET /api/distributions
pub async fn list_events(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListEventsQuery>,
) -> ApiResult<Json<Vec<DistributionEventResponse>>> {
    let service = DistributionService::new(state.service_context());
    let response = service.list_events(&query).await?;
    Ok(Json(response))
}

/// Get a single distribution event
///
/// GET /api/distributions/{id}
pub async fn get_event(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<DistributionEventResponse>> {
    let service = DistributionService::new(state.service_context());
    let response = service.get_event(id).await?;
    Ok(Json(response))
}

/// Schedule a distribution event
///
/// POST /api/distributions
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateDistributionEventRequest>,
) -> ApiResult<Created<Json<DistributionEventResponse>>> {
    let service = DistributionService::new(state.service_context());
    let response = service.create_event(request, auth.user_id()).await?;
    Ok(Created(Json(response)))
}

/// Apply a partial update to a distribution event
///
/// PUT /api/distributions/{id}
pub async fn update_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateDistributionEventRequest>,
) -> ApiResult<Json<DistributionEventResponse>> {
    let service = DistributionService::new(state.service_context());
    let response = service.update_event(id, request, auth.user_id()).await?;
    Ok(Json(response))
}

/// Delete a distribution event and its line items
///
/// DELETE /api/distributions/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<NoContent> {
    let service = DistributionService::new(state.service_context());
    service.delete_event(id, auth.user_id()).await?;
    Ok(NoContent)
}

/// List the line items of a distribution event
///
/// GET /api/distributions/{id}/items
pub async fn list_event_items(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<DistributionItemResponse>>> {
    let service = DistributionService::new(state.service_context());
    let response = service.list_items(id).await?;
    Ok(Json(response))
}

/// Attach a planned line item to a distribution event
///
/// POST /api/distributions/{id}/items
pub async fn add_event_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CreateDistributionItemRequest>,
) -> ApiResult<Created<Json<DistributionItemResponse>>> {
    let service = DistributionService::new(state.service_context());
    let response = service.add_item(id, request).await?;
    Ok(Created(Json(response)))
}
