//! Distribution event database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the distribution_events table
#[derive(Debug, Clone, FromRow)]
pub struct DistributionEventModel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub max_families: Option<i32>,
    pub registered_families: i32,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Database model for the distribution_items table
#[derive(Debug, Clone, FromRow)]
pub struct DistributionItemModel {
    pub id: i32,
    pub distribution_event_id: i32,
    pub inventory_item_id: i32,
    pub quantity_planned: i32,
    pub quantity_distributed: i32,
}
