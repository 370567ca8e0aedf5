//! Inventory service
//!
//! Handles inventory item operations and writes the audit trail for each
//! successful mutation.

use chrono::Utc;
use tracing::{info, instrument};

use pantry_core::entities::{
    ActivityAction, EntityKind, InventoryItemPatch, ItemStatus, NewActivityLog, NewInventoryItem,
    DEFAULT_LOW_STOCK_THRESHOLD,
};
use pantry_core::traits::{InventoryQuery, InventorySort, SortOrder};
use pantry_core::DomainError;

use crate::dto::{
    CreateInventoryItemRequest, InventoryItemResponse, ListInventoryQuery,
    UpdateInventoryItemRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Inventory service
pub struct InventoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InventoryService<'a> {
    /// Create a new InventoryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List inventory items with filtering and sorting
    ///
    /// Category and search filters are pushed down to the store. The status
    /// filter depends on the request-time clock, so it is applied here after
    /// the fetch.
    #[instrument(skip(self))]
    pub async fn list_items(
        &self,
        query: &ListInventoryQuery,
    ) -> ServiceResult<Vec<InventoryItemResponse>> {
        let status_filter = parse_status_filter(query.status.as_deref())?;

        let repo_query = InventoryQuery {
            category: query
                .category
                .as_deref()
                .filter(|c| !c.is_empty() && *c != "All Categories")
                .map(str::to_string),
            search: query
                .search
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            sort_by: match query.sort_by.as_deref() {
                None => InventorySort::default(),
                Some(s) => InventorySort::parse(s).ok_or_else(|| {
                    ServiceError::validation(format!("Unknown sort column: {s}"))
                })?,
            },
            sort_order: match query.sort_order.as_deref() {
                None | Some("asc") => SortOrder::Asc,
                Some("desc") => SortOrder::Desc,
                Some(s) => {
                    return Err(ServiceError::validation(format!("Unknown sort order: {s}")))
                }
            },
        };

        let items = self.ctx.inventory_repo().list(&repo_query).await?;

        let today = Utc::now().date_naive();
        let responses = items
            .iter()
            .filter(|item| status_filter.is_none_or(|wanted| item.status(today) == wanted))
            .map(|item| InventoryItemResponse::from_item(item, today))
            .collect();

        Ok(responses)
    }

    /// Get a single inventory item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ServiceResult<InventoryItemResponse> {
        let item = self
            .ctx
            .inventory_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ItemNotFound(id))?;

        Ok(InventoryItemResponse::from_item(
            &item,
            Utc::now().date_naive(),
        ))
    }

    /// Create an inventory item and log the addition
    #[instrument(skip(self, request))]
    pub async fn create_item(
        &self,
        request: CreateInventoryItemRequest,
        actor: &str,
    ) -> ServiceResult<InventoryItemResponse> {
        let new_item = NewInventoryItem {
            name: request.name,
            category: request.category,
            quantity: request.quantity,
            unit: request.unit,
            expiry_date: request.expiry_date,
            low_stock_threshold: request
                .low_stock_threshold
                .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
            notes: request.notes,
        };

        let item = self.ctx.inventory_repo().create(&new_item, actor).await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Create,
                    EntityKind::InventoryItem,
                    item.id,
                    format!(
                        "Added new inventory item: {} ({} {})",
                        item.name, item.quantity, item.unit
                    ),
                ),
                actor,
            )
            .await?;

        info!(item_id = item.id, "Inventory item created");
        Ok(InventoryItemResponse::from_item(
            &item,
            Utc::now().date_naive(),
        ))
    }

    /// Apply a partial update and log the change
    #[instrument(skip(self, request))]
    pub async fn update_item(
        &self,
        id: i32,
        request: UpdateInventoryItemRequest,
        actor: &str,
    ) -> ServiceResult<InventoryItemResponse> {
        let patch = InventoryItemPatch {
            name: request.name,
            category: request.category,
            quantity: request.quantity,
            unit: request.unit,
            expiry_date: request.expiry_date,
            low_stock_threshold: request.low_stock_threshold,
            notes: request.notes,
        };

        let item = self.ctx.inventory_repo().update(id, &patch).await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Update,
                    EntityKind::InventoryItem,
                    item.id,
                    format!("Updated inventory item: {}", item.name),
                ),
                actor,
            )
            .await?;

        info!(item_id = item.id, "Inventory item updated");
        Ok(InventoryItemResponse::from_item(
            &item,
            Utc::now().date_naive(),
        ))
    }

    /// Delete an inventory item and log the removal.
    /// Deleting a missing item succeeds silently and logs nothing.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32, actor: &str) -> ServiceResult<()> {
        let Some(item) = self.ctx.inventory_repo().find_by_id(id).await? else {
            return Ok(());
        };

        self.ctx.inventory_repo().delete(id).await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Delete,
                    EntityKind::InventoryItem,
                    id,
                    format!("Deleted inventory item: {}", item.name),
                ),
                actor,
            )
            .await?;

        info!(item_id = id, "Inventory item deleted");
        Ok(())
    }
}

/// Translate the raw status query parameter into a display-status filter.
/// Absent, empty, "all" and "All Items" mean no filtering; any other
/// unrecognized value is rejected.
fn parse_status_filter(raw: Option<&str>) -> ServiceResult<Option<ItemStatus>> {
    match raw {
        None | Some("") | Some("all") | Some("All Items") => Ok(None),
        Some(s) => ItemStatus::parse(s)
            .map(Some)
            .ok_or_else(|| ServiceError::validation(format!("Unknown status filter: {s}"))),
    }
}
