//! Activity log - append-only audit trail of mutations on primary entities

use chrono::{DateTime, Utc};

/// Kind of mutation recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
}

impl ActivityAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Primary entity kinds tracked by the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    InventoryItem,
    Donation,
    DistributionEvent,
}

impl EntityKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "inventory_item" => Some(Self::InventoryItem),
            "donation" => Some(Self::Donation),
            "distribution_event" => Some(Self::DistributionEvent),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InventoryItem => "inventory_item",
            Self::Donation => "donation",
            Self::DistributionEvent => "distribution_event",
        }
    }
}

/// One audit-trail row. Written exactly once per successful mutation of a
/// primary entity; never updated or deleted by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLog {
    pub id: i32,
    pub action: ActivityAction,
    pub entity_type: EntityKind,
    pub entity_id: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Fields for appending a log entry
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    pub action: ActivityAction,
    pub entity_type: EntityKind,
    pub entity_id: i32,
    pub description: String,
}

impl NewActivityLog {
    pub fn new(
        action: ActivityAction,
        entity_type: EntityKind,
        entity_id: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            action,
            entity_type,
            entity_id,
            description: description.into(),
        }
    }
}
