//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Update bodies distinguish "field absent" (leave unchanged)
//! from "field null" (clear) with `Option<Option<T>>` fields.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use pantry_core::entities::{DonationType, EventStatus};

/// Deserialize a nullable field so that an explicit `null` becomes
/// `Some(None)` while an absent field stays `None` (via `#[serde(default)]`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

fn validate_donation_type(value: &str) -> Result<(), ValidationError> {
    if DonationType::parse(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("donation_type")
            .with_message("must be one of: food, monetary, other".into()))
    }
}

fn validate_event_status(value: &str) -> Result<(), ValidationError> {
    if EventStatus::parse(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("status")
            .with_message("must be one of: scheduled, active, completed, cancelled".into()))
    }
}

// ============================================================================
// Inventory Requests
// ============================================================================

/// Create inventory item request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    #[serde(default)]
    pub quantity: i32,

    #[validate(length(min = 1, max = 50, message = "Unit must be 1-50 characters"))]
    pub unit: String,

    pub expiry_date: Option<NaiveDate>,

    #[validate(range(min = 0, message = "Threshold must not be negative"))]
    pub low_stock_threshold: Option<i32>,

    pub notes: Option<String>,
}

/// Partial update of an inventory item
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateInventoryItemRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: Option<String>,

    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    pub quantity: Option<i32>,

    #[validate(length(min = 1, max = 50, message = "Unit must be 1-50 characters"))]
    pub unit: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub expiry_date: Option<Option<NaiveDate>>,

    #[validate(range(min = 0, message = "Threshold must not be negative"))]
    pub low_stock_threshold: Option<i32>,

    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

/// Inventory list query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListInventoryQuery {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

// ============================================================================
// Donation Requests
// ============================================================================

/// Record donation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDonationRequest {
    #[validate(length(min = 1, max = 255, message = "Donor name must be 1-255 characters"))]
    pub donor_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub donor_email: Option<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub donor_phone: Option<String>,

    #[validate(custom(function = "validate_donation_type"))]
    pub donation_type: String,

    pub description: Option<String>,

    pub value: Option<Decimal>,

    /// Defaults to the time of recording when omitted
    pub donation_date: Option<DateTime<Utc>>,

    pub notes: Option<String>,
}

/// Partial update of a donation
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDonationRequest {
    #[validate(length(min = 1, max = 255, message = "Donor name must be 1-255 characters"))]
    pub donor_name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub donor_email: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub donor_phone: Option<Option<String>>,

    #[validate(custom(function = "validate_donation_type"))]
    pub donation_type: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub value: Option<Option<Decimal>>,

    pub donation_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

/// Donation list query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDonationsQuery {
    pub donation_type: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

/// Attach a line item to a donation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDonationItemRequest {
    pub inventory_item_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    pub expiry_date: Option<NaiveDate>,
}

// ============================================================================
// Distribution Requests
// ============================================================================

/// Schedule distribution event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDistributionEventRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    pub description: Option<String>,

    pub event_date: DateTime<Utc>,

    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    #[validate(range(min = 1, message = "Family cap must be at least 1"))]
    pub max_families: Option<i32>,

    #[validate(range(min = 0, message = "Registered families must not be negative"))]
    pub registered_families: Option<i32>,

    #[validate(custom(function = "validate_event_status"))]
    pub status: Option<String>,

    pub notes: Option<String>,
}

/// Partial update of a distribution event
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDistributionEventRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    pub event_date: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub max_families: Option<Option<i32>>,

    #[validate(range(min = 0, message = "Registered families must not be negative"))]
    pub registered_families: Option<i32>,

    #[validate(custom(function = "validate_event_status"))]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

/// Distribution event list query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEventsQuery {
    pub status: Option<String>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

/// Attach a line item to a distribution event
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDistributionItemRequest {
    pub inventory_item_id: i32,

    #[validate(range(min = 1, message = "Planned quantity must be at least 1"))]
    pub quantity_planned: i32,

    #[validate(range(min = 0, message = "Distributed quantity must not be negative"))]
    pub quantity_distributed: Option<i32>,
}

// ============================================================================
// Dashboard Requests
// ============================================================================

/// Recent activity query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentActivityQuery {
    pub limit: Option<i64>,
}
