//! Application services
//!
//! Each service borrows the shared [`ServiceContext`] and exposes the use
//! cases for one resource.

mod context;
mod dashboard;
mod distribution;
mod donation;
mod error;
mod inventory;
mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use distribution::DistributionService;
pub use donation::DonationService;
pub use error::{ServiceError, ServiceResult};
pub use inventory::InventoryService;
pub use user::UserService;
