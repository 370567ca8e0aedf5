//! Donation handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use pantry_service::{
    CreateDonationItemRequest, CreateDonationRequest, DonationItemResponse, DonationResponse,
    DonationService, ListDonationsQuery, UpdateDonationRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List donations, newest first
///
/// GET /api/donations
pub async fn list_donations(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<ListDonationsQuery>,
) -> ApiResult<Json<Vec<DonationResponse>>> {
    let service = DonationService::new(state.service_context());
    let response = service.list_donations(&query).await?;
    Ok(Json(response))
}

/// Get a single donation
///
/// GET /api/donations/{id}
pub async fn get_donation(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<DonationResponse>> {
    let service = DonationService::new(state.service_context());
    let response = service.get_donation(id).await?;
    Ok(Json(response))
}

/// Record a donation
///
/// POST /api/donations
pub async fn create_donation(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateDonationRequest>,
) -> ApiResult<Created<Json<DonationResponse>>> {
    let service = DonationService::new(state.service_context());
    let response = service.create_donation(request, auth.user_id()).await?;
    Ok(Created(Json(response)))
}

/// Apply a partial update to a donation
///
/// PUT /api/donations/{id}
pub async fn update_donation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateDonationRequest>,
) -> ApiResult<Json<DonationResponse>> {
    let service = DonationService::new(state.service_context());
    let response = service.update_donation(id, request, auth.user_id()).await?;
    Ok(Json(response))
}

/// Delete a donation and its line items
///
/// DELETE /api/donations/{id}
pub async fn delete_donation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<NoContent> {
    let service = DonationService::new(state.service_context());
    service.delete_donation(id, auth.user_id()).await?;
    Ok(NoContent)
}

/// List the line items of a donation
///
/// GET /api/donations/{id}/items
pub async fn list_donation_items(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<DonationItemResponse>>> {
    let service = DonationService::new(state.service_context());
    let response = service.list_items(id).await?;
    Ok(Json(response))
}

/// Attach a line item to a donation
///
/// POST /api/donations/{id}/items
pub async fn add_donation_item(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<CreateDonationItemRequest>,
) -> ApiResult<Created<Json<DonationItemResponse>>> {
    let service = DonationService::new(state.service_context());
    let response = service.add_item(id, request).await?;
    Ok(Created(Json(response)))
}
