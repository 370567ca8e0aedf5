//! Activity log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the activity_log table
#[derive(Debug, Clone, FromRow)]
pub struct ActivityLogModel {
    pub id: i32,
    pub action: String,
    pub entity_type: String,
    pub entity_id: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}
