//! Inventory item database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for the inventory_items table
///
/// The display status is not stored; it is derived from quantity, threshold,
/// and expiry date at read time.
#[derive(Debug, Clone, FromRow)]
pub struct InventoryItemModel {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub low_stock_threshold: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
}
