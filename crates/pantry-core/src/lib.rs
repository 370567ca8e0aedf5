//! # pantry-core
//!
//! Domain layer for the food-bank operations tracker: entities, repository
//! traits, and the inventory status/alert derivation rules.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod calendar;
pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    ActivityAction, ActivityLog, DistributionEvent, DistributionEventPatch, DistributionItem,
    Donation, DonationItem, DonationPatch, DonationType, EntityKind, EventStatus, InventoryItem,
    InventoryItemPatch, ItemStatus, NewActivityLog, NewDistributionEvent, NewDistributionItem,
    NewDonation, NewDonationItem, NewInventoryItem, User, UserProfile, UserRole,
    DEFAULT_LOW_STOCK_THRESHOLD, EXPIRY_WINDOW_DAYS,
};
pub use error::DomainError;
pub use traits::{
    ActivityLogRepository, DashboardRepository, DashboardStats, DistributionRepository,
    DonationQuery, DonationRepository, EventQuery, InventoryQuery, InventoryRepository,
    InventorySort, RepoResult, SortOrder, UserRepository,
};
