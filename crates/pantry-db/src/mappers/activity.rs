//! Activity log entity <-> model mapper

use pantry_core::entities::{ActivityAction, ActivityLog, EntityKind};
use pantry_core::error::DomainError;

use crate::models::ActivityLogModel;

/// Convert ActivityLogModel to ActivityLog entity
impl TryFrom<ActivityLogModel> for ActivityLog {
    type Error = DomainError;

    fn try_from(model: ActivityLogModel) -> Result<Self, Self::Error> {
        let action = ActivityAction::parse(&model.action)
            .ok_or_else(|| DomainError::invalid_field("action", model.action.clone()))?;
        let entity_type = EntityKind::parse(&model.entity_type)
            .ok_or_else(|| DomainError::invalid_field("entity_type", model.entity_type.clone()))?;

        Ok(ActivityLog {
            action,
            entity_type,
            id: model.id,
            entity_id: model.entity_id,
            description: model.description,
            created_at: model.created_at,
            created_by: model.created_by,
        })
    }
}
