//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Mutations that record who acted take the
//! actor's user id as an explicit parameter; there is no ambient
//! "current user" state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    ActivityLog, DistributionEvent, DistributionEventPatch, DistributionItem, Donation,
    DonationItem, DonationPatch, DonationType, EventStatus, InventoryItem, InventoryItemPatch,
    NewActivityLog, NewDistributionEvent, NewDistributionItem, NewDonation, NewDonationItem,
    NewInventoryItem, User, UserProfile,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sortable inventory columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventorySort {
    #[default]
    Name,
    Quantity,
    ExpiryDate,
}

impl InventorySort {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "quantity" => Some(Self::Quantity),
            "expiryDate" | "expiry_date" => Some(Self::ExpiryDate),
            _ => None,
        }
    }
}

/// Store-translatable inventory list filters
///
/// The status filter is deliberately absent: it depends on the request-time
/// clock and is applied in application code after the fetch.
#[derive(Debug, Clone, Default)]
pub struct InventoryQuery {
    /// Exact category match
    pub category: Option<String>,
    /// Case-insensitive substring match against name and category
    pub search: Option<String>,
    pub sort_by: InventorySort,
    pub sort_order: SortOrder,
}

/// Donation list filters; results are ordered by donation date descending
#[derive(Debug, Clone, Default)]
pub struct DonationQuery {
    pub donation_type: Option<DonationType>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

/// Distribution event list filters; results are ordered by event date descending
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    pub status: Option<EventStatus>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

/// Scalar dashboard summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    /// Count of all inventory rows
    pub total_items: i64,
    /// Donations dated on or after the first day of the current month
    pub monthly_donations: i64,
    /// Sum of registered families over completed events this month
    pub families_served: i64,
    /// Scheduled events dated now or later
    pub upcoming_events: i64,
    /// Items with quantity at or below their threshold
    pub low_stock_count: i64,
    /// Items with an expiry date within the 7-day window
    pub expiring_count: i64,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by identity-provider subject id
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>>;

    /// Insert the user or refresh their profile fields, keyed on id.
    /// The role is preserved on update and defaults to volunteer on insert.
    async fn upsert(&self, profile: &UserProfile) -> RepoResult<User>;
}

// ============================================================================
// Inventory Repository
// ============================================================================

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// List items matching the store-translatable filters
    async fn list(&self, query: &InventoryQuery) -> RepoResult<Vec<InventoryItem>>;

    /// Find item by id
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<InventoryItem>>;

    /// Insert a new item and return the persisted row
    async fn create(&self, item: &NewInventoryItem, created_by: &str) -> RepoResult<InventoryItem>;

    /// Apply a partial patch, refreshing the updated-at timestamp.
    /// Fails with `ItemNotFound` when the id does not exist.
    async fn update(&self, id: i32, patch: &InventoryItemPatch) -> RepoResult<InventoryItem>;

    /// Delete the row; deleting a missing id is not an error
    async fn delete(&self, id: i32) -> RepoResult<()>;

    /// Items with quantity at or below their low-stock threshold
    async fn low_stock(&self) -> RepoResult<Vec<InventoryItem>>;

    /// Items with a non-null expiry date at most `days` days away
    async fn expiring(&self, days: u64) -> RepoResult<Vec<InventoryItem>>;
}

// ============================================================================
// Donation Repository
// ============================================================================

#[async_trait]
pub trait DonationRepository: Send + Sync {
    async fn list(&self, query: &DonationQuery) -> RepoResult<Vec<Donation>>;

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Donation>>;

    /// Insert a new donation; the donation date defaults to now when omitted
    async fn create(&self, donation: &NewDonation, created_by: &str) -> RepoResult<Donation>;

    /// Fails with `DonationNotFound` when the id does not exist
    async fn update(&self, id: i32, patch: &DonationPatch) -> RepoResult<Donation>;

    /// Delete the donation and its line items; missing id is not an error
    async fn delete(&self, id: i32) -> RepoResult<()>;

    /// Line items attached to a donation
    async fn items(&self, donation_id: i32) -> RepoResult<Vec<DonationItem>>;

    /// Attach a line item to a donation
    async fn add_item(&self, donation_id: i32, item: &NewDonationItem) -> RepoResult<DonationItem>;
}

// ============================================================================
// Distribution Repository
// ============================================================================

#[async_trait]
pub trait DistributionRepository: Send + Sync {
    async fn list(&self, query: &EventQuery) -> RepoResult<Vec<DistributionEvent>>;

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<DistributionEvent>>;

    async fn create(
        &self,
        event: &NewDistributionEvent,
        created_by: &str,
    ) -> RepoResult<DistributionEvent>;

    /// Fails with `EventNotFound` when the id does not exist
    async fn update(&self, id: i32, patch: &DistributionEventPatch)
        -> RepoResult<DistributionEvent>;

    /// Delete the event and its line items; missing id is not an error
    async fn delete(&self, id: i32) -> RepoResult<()>;

    /// Line items attached to an event
    async fn items(&self, event_id: i32) -> RepoResult<Vec<DistributionItem>>;

    /// Attach a line item to an event
    async fn add_item(
        &self,
        event_id: i32,
        item: &NewDistributionItem,
    ) -> RepoResult<DistributionItem>;
}

// ============================================================================
// Activity Log Repository
// ============================================================================

#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    /// Append one audit row
    async fn append(&self, entry: &NewActivityLog, created_by: &str) -> RepoResult<ActivityLog>;

    /// Most recent entries, newest first
    async fn recent(&self, limit: i64) -> RepoResult<Vec<ActivityLog>>;
}

// ============================================================================
// Dashboard Repository
// ============================================================================

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Compute the six summary statistics as of `now`.
    ///
    /// Each statistic is an independent read; no cross-statistic snapshot
    /// consistency is guaranteed.
    async fn stats(&self, now: DateTime<Utc>) -> RepoResult<DashboardStats>;
}
