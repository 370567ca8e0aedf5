//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response mirrors for API tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a unique test user id
pub fn unique_user_id() -> String {
    format!("test-user-{}", Uuid::new_v4())
}

/// Generate a unique name with the given prefix
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

// ============================================================================
// Inventory
// ============================================================================

/// Create inventory item request body
#[derive(Debug, Clone, Serialize)]
pub struct NewItemBody {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewItemBody {
    pub fn unique() -> Self {
        Self {
            name: unique_name("Canned Beans"),
            category: "Canned Goods".to_string(),
            quantity: 20,
            unit: "cans".to_string(),
            expiry_date: None,
            low_stock_threshold: None,
            notes: None,
        }
    }
}

/// Inventory item response mirror
#[derive(Debug, Deserialize)]
pub struct ItemBody {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub expiry_date: Option<String>,
    pub low_stock_threshold: i32,
    pub notes: Option<String>,
    pub status: String,
    pub created_by: Option<String>,
}

// ============================================================================
// Donations
// ============================================================================

/// Record donation request body
#[derive(Debug, Clone, Serialize)]
pub struct NewDonationBody {
    pub donor_name: String,
    pub donation_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_date: Option<String>,
}

impl NewDonationBody {
    pub fn unique() -> Self {
        Self {
            donor_name: unique_name("Donor"),
            donation_type: "food".to_string(),
            donor_email: None,
            value: None,
            donation_date: None,
        }
    }
}

/// Donation response mirror
#[derive(Debug, Deserialize)]
pub struct DonationBody {
    pub id: i32,
    pub donor_name: String,
    pub donation_type: String,
    pub donation_date: String,
    pub created_by: Option<String>,
}

/// Donation line item request body
#[derive(Debug, Serialize)]
pub struct NewDonationItemBody {
    pub inventory_item_id: i32,
    pub quantity: i32,
}

/// Donation line item response mirror
#[derive(Debug, Deserialize)]
pub struct DonationItemBody {
    pub id: i32,
    pub donation_id: i32,
    pub inventory_item_id: i32,
    pub quantity: i32,
}

// ============================================================================
// Distribution events
// ============================================================================

/// Schedule distribution event request body
#[derive(Debug, Clone, Serialize)]
pub struct NewEventBody {
    pub name: String,
    pub event_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_families: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl NewEventBody {
    pub fn unique() -> Self {
        let date = chrono::Utc::now() + chrono::Duration::days(7);
        Self {
            name: unique_name("Distribution"),
            event_date: date.to_rfc3339(),
            location: Some("Community Center".to_string()),
            max_families: Some(40),
            status: None,
        }
    }
}

/// Distribution event response mirror
#[derive(Debug, Deserialize)]
pub struct EventBody {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub registered_families: i32,
    pub max_families: Option<i32>,
}

/// Distribution line item request body
#[derive(Debug, Serialize)]
pub struct NewEventItemBody {
    pub inventory_item_id: i32,
    pub quantity_planned: i32,
}

/// Distribution line item response mirror
#[derive(Debug, Deserialize)]
pub struct EventItemBody {
    pub id: i32,
    pub distribution_event_id: i32,
    pub inventory_item_id: i32,
    pub quantity_planned: i32,
    pub quantity_distributed: i32,
}

// ============================================================================
// Dashboard and session
// ============================================================================

/// Session user response mirror
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: String,
    pub email: Option<String>,
    pub role: String,
}

/// Dashboard statistics response mirror
#[derive(Debug, Deserialize)]
pub struct StatsBody {
    pub total_items: i64,
    pub monthly_donations: i64,
    pub families_served: i64,
    pub upcoming_events: i64,
    pub low_stock_count: i64,
    pub expiring_count: i64,
}

/// Alert response mirror
#[derive(Debug, Deserialize)]
pub struct AlertBody {
    pub id: i32,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub title: String,
    pub description: String,
    pub priority: String,
}

/// Activity log entry response mirror
#[derive(Debug, Deserialize)]
pub struct ActivityBody {
    pub id: i32,
    pub action: String,
    pub entity_type: String,
    pub entity_id: i32,
    pub description: String,
    pub created_by: Option<String>,
}
