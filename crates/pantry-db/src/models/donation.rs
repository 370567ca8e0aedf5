//! Donation database models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the donations table
#[derive(Debug, Clone, FromRow)]
pub struct DonationModel {
    pub id: i32,
    pub donor_name: String,
    pub donor_email: Option<String>,
    pub donor_phone: Option<String>,
    pub donation_type: String,
    pub description: Option<String>,
    pub value: Option<Decimal>,
    pub donation_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Database model for the donation_items table
#[derive(Debug, Clone, FromRow)]
pub struct DonationItemModel {
    pub id: i32,
    pub donation_id: i32,
    pub inventory_item_id: i32,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
}
