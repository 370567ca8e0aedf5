//! Inventory handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use pantry_service::{
    CreateInventoryItemRequest, InventoryItemResponse, InventoryService, ListInventoryQuery,
    UpdateInventoryItemRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List inventory items
///
/// GET /api/inventory
pub async fn list_items(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListInventoryQuery>,
) -> ApiResult<Json<Vec<InventoryItemResponse>>> {
    let service = InventoryService::new(state.service_context());
    let response = service.list_items(&query).await?;
    Ok(Json(response))
}

/// Get a single inventory item
///
/// GET /api/inventory/{id}
pub async fn get_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<InventoryItemResponse>> {
    let service = InventoryService::new(state.service_context());
    let response = service.get_item(id).await?;
    Ok(Json(response))
}

/// Create an inventory item
///
/// POST /api/inventory
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateInventoryItemRequest>,
) -> ApiResult<Created<Json<InventoryItemResponse>>> {
    let service = InventoryService::new(state.service_context());
    let response = service.create_item(request, auth.user_id()).await?;
    Ok(Created(Json(response)))
}

/// Apply a partial update to an inventory item
///
/// PUT /api/inventory/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateInventoryItemRequest>,
) -> ApiResult<Json<InventoryItemResponse>> {
    let service = InventoryService::new(state.service_context());
    let response = service.update_item(id, request, auth.user_id()).await?;
    Ok(Json(response))
}

/// Delete an inventory item
///
/// DELETE /api/inventory/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<NoContent> {
    let service = InventoryService::new(state.service_context());
    service.delete_item(id, auth.user_id()).await?;
    Ok(NoContent)
}
