//! Distribution event entity and its line items

use chrono::{DateTime, Utc};

/// Lifecycle status of a distribution event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(Self::Scheduled),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Distribution event entity - a scheduled occasion at which inventory is
/// given to families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionEvent {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub max_families: Option<i32>,
    pub registered_families: i32,
    pub status: EventStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl DistributionEvent {
    /// Whether the event still counts toward the upcoming-events statistic
    #[inline]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.status == EventStatus::Scheduled && self.event_date >= now
    }

    /// Whether registration has reached the family cap (unlimited when no cap)
    pub fn is_full(&self) -> bool {
        self.max_families
            .is_some_and(|cap| self.registered_families >= cap)
    }
}

/// Fields for scheduling a distribution event
#[derive(Debug, Clone)]
pub struct NewDistributionEvent {
    pub name: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub max_families: Option<i32>,
    pub registered_families: i32,
    pub status: EventStatus,
    pub notes: Option<String>,
}

/// Partial update of a distribution event; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct DistributionEventPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<Option<String>>,
    pub max_families: Option<Option<i32>>,
    pub registered_families: Option<i32>,
    pub status: Option<EventStatus>,
    pub notes: Option<Option<String>>,
}

/// Planned and distributed quantities of one inventory item at an event;
/// child of [`DistributionEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionItem {
    pub id: i32,
    pub distribution_event_id: i32,
    pub inventory_item_id: i32,
    pub quantity_planned: i32,
    pub quantity_distributed: i32,
}

/// Fields for attaching a line item to a distribution event
#[derive(Debug, Clone)]
pub struct NewDistributionItem {
    pub inventory_item_id: i32,
    pub quantity_planned: i32,
    pub quantity_distributed: i32,
}
