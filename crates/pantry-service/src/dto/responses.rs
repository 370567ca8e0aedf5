//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Enum-valued
//! fields are serialized as their wire strings.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Session user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Inventory Responses
// ============================================================================

/// Inventory item response, including the derived display status
#[derive(Debug, Clone, Serialize)]
pub struct InventoryItemResponse {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub low_stock_threshold: i32,
    pub notes: Option<String>,
    /// Derived at read time: "In Stock" | "Low Stock" | "Out of Stock" | "Expires Soon"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

// ============================================================================
// Donation Responses
// ============================================================================

/// Donation response
#[derive(Debug, Clone, Serialize)]
pub struct DonationResponse {
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

/// Donation line item response
#[derive(Debug, Clone, Serialize)]
pub struct DonationItemResponse {
    pub id: i32,
    pub donation_id: i32,
    pub inventory_item_id: i32,
    pub quantity: i32,
    pub expiry_date: Option<NaiveDate>,
}

// ============================================================================
// Distribution Responses
// ============================================================================

/// Distribution event response
#[derive(Debug, Clone, Serialize)]
pub struct DistributionEventResponse {
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

/// Distribution line item response
#[derive(Debug, Clone, Serialize)]
pub struct DistributionItemResponse {
    pub id: i32,
    pub distribution_event_id: i32,
    pub inventory_item_id: i32,
    pub quantity_planned: i32,
    pub quantity_distributed: i32,
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// Activity log entry response
#[derive(Debug, Clone, Serialize)]
pub struct ActivityLogResponse {
    pub id: i32,
    pub action: String,
    pub entity_type: String,
    pub entity_id: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Dashboard summary statistics response
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatsResponse {
    pub total_items: i64,
    pub monthly_donations: i64,
    pub families_served: i64,
    pub upcoming_events: i64,
    pub low_stock_count: i64,
    pub expiring_count: i64,
}

/// One dashboard alert
///
/// Low-stock alerts carry priority "high", expiring alerts "medium". An item
/// can appear in both lists at once.
#[derive(Debug, Clone, Serialize)]
pub struct AlertResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub title: String,
    pub description: String,
    pub priority: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health status per dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
