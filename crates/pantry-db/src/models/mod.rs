//! Database models with SQLx `FromRow` derives

mod activity;
mod distribution;
mod donation;
mod inventory;
mod user;

pub use activity::ActivityLogModel;
pub use distribution::{DistributionEventModel, DistributionItemModel};
pub use donation::{DonationItemModel, DonationModel};
pub use inventory::InventoryItemModel;
pub use user::UserModel;
