//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! The inventory mapper takes the request-time date because the display
//! status is derived, not stored.

use chrono::NaiveDate;

use pantry_core::entities::{
    ActivityLog, DistributionEvent, DistributionItem, Donation, DonationItem, InventoryItem, User,
};
use pantry_core::traits::DashboardStats;

use super::responses::{
    ActivityLogResponse, DashboardStatsResponse, DistributionEventResponse,
    DistributionItemResponse, DonationItemResponse, DonationResponse, InventoryItemResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            profile_image_url: user.profile_image_url.clone(),
            role: user.role.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Inventory Mappers
// ============================================================================

impl InventoryItemResponse {
    /// Build the response with the status derived as of `today`
    pub fn from_item(item: &InventoryItem, today: NaiveDate) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            expiry_date: item.expiry_date,
            low_stock_threshold: item.low_stock_threshold,
            notes: item.notes.clone(),
            status: item.status(today).as_str().to_string(),
            created_at: item.created_at,
            updated_at: item.updated_at,
            created_by: item.created_by.clone(),
        }
    }
}

// ============================================================================
// Donation Mappers
// ============================================================================

impl From<&Donation> for DonationResponse {
    fn from(donation: &Donation) -> Self {
        Self {
            id: donation.id,
            donor_name: donation.donor_name.clone(),
            donor_email: donation.donor_email.clone(),
            donor_phone: donation.donor_phone.clone(),
            donation_type: donation.donation_type.as_str().to_string(),
            description: donation.description.clone(),
            value: donation.value,
            donation_date: donation.donation_date,
            notes: donation.notes.clone(),
            created_at: donation.created_at,
            created_by: donation.created_by.clone(),
        }
    }
}

impl From<Donation> for DonationResponse {
    fn from(donation: Donation) -> Self {
        Self::from(&donation)
    }
}

impl From<&DonationItem> for DonationItemResponse {
    fn from(item: &DonationItem) -> Self {
        Self {
            id: item.id,
            donation_id: item.donation_id,
            inventory_item_id: item.inventory_item_id,
            quantity: item.quantity,
            expiry_date: item.expiry_date,
        }
    }
}

impl From<DonationItem> for DonationItemResponse {
    fn from(item: DonationItem) -> Self {
        Self::from(&item)
    }
}

// ============================================================================
// Distribution Mappers
// ============================================================================

impl From<&DistributionEvent> for DistributionEventResponse {
    fn from(event: &DistributionEvent) -> Self {
        Self {
            id: event.id,
            name: event.name.clone(),
            description: event.description.clone(),
            event_date: event.event_date,
            location: event.location.clone(),
            max_families: event.max_families,
            registered_families: event.registered_families,
            status: event.status.as_str().to_string(),
            notes: event.notes.clone(),
            created_at: event.created_at,
            created_by: event.created_by.clone(),
        }
    }
}

impl From<DistributionEvent> for DistributionEventResponse {
    fn from(event: DistributionEvent) -> Self {
        Self::from(&event)
    }
}

impl From<&DistributionItem> for DistributionItemResponse {
    fn from(item: &DistributionItem) -> Self {
        Self {
            id: item.id,
            distribution_event_id: item.distribution_event_id,
            inventory_item_id: item.inventory_item_id,
            quantity_planned: item.quantity_planned,
            quantity_distributed: item.quantity_distributed,
        }
    }
}

impl From<DistributionItem> for DistributionItemResponse {
    fn from(item: DistributionItem) -> Self {
        Self::from(&item)
    }
}

// ============================================================================
// Dashboard Mappers
// ============================================================================

impl From<&ActivityLog> for ActivityLogResponse {
    fn from(entry: &ActivityLog) -> Self {
        Self {
            id: entry.id,
            action: entry.action.as_str().to_string(),
            entity_type: entry.entity_type.as_str().to_string(),
            entity_id: entry.entity_id,
            description: entry.description.clone(),
            created_at: entry.created_at,
            created_by: entry.created_by.clone(),
        }
    }
}

impl From<ActivityLog> for ActivityLogResponse {
    fn from(entry: ActivityLog) -> Self {
        Self::from(&entry)
    }
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_items: stats.total_items,
            monthly_donations: stats.monthly_donations,
            families_served: stats.families_served,
            upcoming_events: stats.upcoming_events,
            low_stock_count: stats.low_stock_count,
            expiring_count: stats.expiring_count,
        }
    }
}
