//! Distribution service
//!
//! Schedules distribution events and manages their planned line items.
//! Mutations on the event itself are logged; line-item mutations are not.

use tracing::{info, instrument};

use pantry_core::entities::{
    ActivityAction, DistributionEventPatch, EntityKind, EventStatus, NewActivityLog,
    NewDistributionEvent, NewDistributionItem,
};
use pantry_core::traits::EventQuery;
use pantry_core::DomainError;

use crate::dto::{
    CreateDistributionEventRequest, CreateDistributionItemRequest, DistributionEventResponse,
    DistributionItemResponse, ListEventsQuery, UpdateDistributionEventRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Distribution service
pub struct DistributionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DistributionService<'a> {
    /// Create a new DistributionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List distribution events, newest first
    #[instrument(skip(self))]
    pub async fn list_events(
        &self,
        query: &ListEventsQuery,
    ) -> ServiceResult<Vec<DistributionEventResponse>> {
        let repo_query = EventQuery {
            status: match query.status.as_deref() {
                None | Some("") | Some("all") => None,
                Some(s) => Some(EventStatus::parse(s).ok_or_else(|| {
                    ServiceError::validation(format!("Unknown event status filter: {s}"))
                })?),
            },
            date_from: query.date_from,
            date_to: query.date_to,
        };

        let events = self.ctx.distribution_repo().list(&repo_query).await?;
        Ok(events.iter().map(DistributionEventResponse::from).collect())
    }

    /// Get a single distribution event by ID
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: i32) -> ServiceResult<DistributionEventResponse> {
        let event = self
            .ctx
            .distribution_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EventNotFound(id))?;

        Ok(DistributionEventResponse::from(&event))
    }

    /// Schedule a distribution event and log it
    #[instrument(skip(self, request))]
    pub async fn create_event(
        &self,
        request: CreateDistributionEventRequest,
        actor: &str,
    ) -> ServiceResult<DistributionEventResponse> {
        let status = request
            .status
            .as_deref()
            .map(|s| {
                EventStatus::parse(s)
                    .ok_or_else(|| DomainError::invalid_field("status", s.to_string()))
            })
            .transpose()?
            .unwrap_or_default();

        let new_event = NewDistributionEvent {
            name: request.name,
            description: request.description,
            event_date: request.event_date,
            location: request.location,
            max_families: request.max_families,
            registered_families: request.registered_families.unwrap_or(0),
            status,
            notes: request.notes,
        };

        let event = self
            .ctx
            .distribution_repo()
            .create(&new_event, actor)
            .await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Create,
                    EntityKind::DistributionEvent,
                    event.id,
                    format!("Scheduled distribution event: {}", event.name),
                ),
                actor,
            )
            .await?;

        info!(event_id = event.id, "Distribution event scheduled");
        Ok(DistributionEventResponse::from(&event))
    }

    /// Apply a partial update and log the change
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        id: i32,
        request: UpdateDistributionEventRequest,
        actor: &str,
    ) -> ServiceResult<DistributionEventResponse> {
        let status = request
            .status
            .as_deref()
            .map(|s| {
                EventStatus::parse(s)
                    .ok_or_else(|| DomainError::invalid_field("status", s.to_string()))
            })
            .transpose()?;

        let patch = DistributionEventPatch {
            name: request.name,
            description: request.description,
            event_date: request.event_date,
            location: request.location,
            max_families: request.max_families,
            registered_families: request.registered_families,
            status,
            notes: request.notes,
        };

        let event = self.ctx.distribution_repo().update(id, &patch).await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Update,
                    EntityKind::DistributionEvent,
                    event.id,
                    format!("Updated distribution event: {}", event.name),
                ),
                actor,
            )
            .await?;

        info!(event_id = event.id, "Distribution event updated");
        Ok(DistributionEventResponse::from(&event))
    }

    /// Delete an event and its line items, and log the removal.
    /// Deleting a missing event succeeds silently and logs nothing.
    #[instrument(skip(self))]
    pub async fn delete_event(&self, id: i32, actor: &str) -> ServiceResult<()> {
        let Some(event) = self.ctx.distribution_repo().find_by_id(id).await? else {
            return Ok(());
        };

        self.ctx.distribution_repo().delete(id).await?;

        self.ctx
            .activity_repo()
            .append(
                &NewActivityLog::new(
                    ActivityAction::Delete,
                    EntityKind::DistributionEvent,
                    id,
                    format!("Deleted distribution event: {}", event.name),
                ),
                actor,
            )
            .await?;

        info!(event_id = id, "Distribution event deleted");
        Ok(())
    }

    /// Line items attached to an event
    #[instrument(skip(self))]
    pub async fn list_items(&self, event_id: i32) -> ServiceResult<Vec<DistributionItemResponse>> {
        self.ctx
            .distribution_repo()
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        let items = self.ctx.distribution_repo().items(event_id).await?;
        Ok(items.iter().map(DistributionItemResponse::from).collect())
    }

    /// Attach a planned line item to an existing event
    #[instrument(skip(self, request))]
    pub async fn add_item(
        &self,
        event_id: i32,
        request: CreateDistributionItemRequest,
    ) -> ServiceResult<DistributionItemResponse> {
        self.ctx
            .distribution_repo()
            .find_by_id(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;

        let new_item = NewDistributionItem {
            inventory_item_id: request.inventory_item_id,
            quantity_planned: request.quantity_planned,
            quantity_distributed: request.quantity_distributed.unwrap_or(0),
        };

        let item = self
            .ctx
            .distribution_repo()
            .add_item(event_id, &new_item)
            .await?;

        info!(event_id, item_id = item.id, "Distribution line item added");
        Ok(DistributionItemResponse::from(&item))
    }
}
