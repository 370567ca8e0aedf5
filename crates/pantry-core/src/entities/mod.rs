//! Domain entities - core business objects

mod activity;
mod distribution;
mod donation;
mod inventory;
mod user;

pub use activity::{ActivityAction, ActivityLog, EntityKind, NewActivityLog};
pub use distribution::{
    DistributionEvent, DistributionEventPatch, DistributionItem, EventStatus,
    NewDistributionEvent, NewDistributionItem,
};
pub use donation::{
    Donation, DonationItem, DonationPatch, DonationType, NewDonation, NewDonationItem,
};
pub use inventory::{
    InventoryItem, InventoryItemPatch, ItemStatus, NewInventoryItem, DEFAULT_LOW_STOCK_THRESHOLD,
    EXPIRY_WINDOW_DAYS,
};
pub use user::{User, UserProfile, UserRole};
