//! Distribution event entity <-> model mappers

use pantry_core::entities::{DistributionEvent, DistributionItem, EventStatus};
use pantry_core::error::DomainError;

use crate::models::{DistributionEventModel, DistributionItemModel};

/// Convert DistributionEventModel to DistributionEvent entity
impl TryFrom<DistributionEventModel> for DistributionEvent {
    type Error = DomainError;

    fn try_from(model: DistributionEventModel) -> Result<Self, Self::Error> {
        let status = EventStatus::parse(&model.status)
            .ok_or_else(|| DomainError::invalid_field("status", model.status.clone()))?;

        Ok(DistributionEvent {
            status,
            id: model.id,
            name: model.name,
            description: model.description,
            event_date: model.event_date,
            location: model.location,
            max_families: model.max_families,
            registered_families: model.registered_families,
            notes: model.notes,
            created_at: model.created_at,
            created_by: model.created_by,
        })
    }
}

/// Convert DistributionItemModel to DistributionItem entity
impl From<DistributionItemModel> for DistributionItem {
    fn from(model: DistributionItemModel) -> Self {
        DistributionItem {
            id: model.id,
            distribution_event_id: model.distribution_event_id,
            inventory_item_id: model.inventory_item_id,
            quantity_planned: model.quantity_planned,
            quantity_distributed: model.quantity_distributed,
        }
    }
}
