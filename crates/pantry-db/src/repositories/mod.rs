//! PostgreSQL repository implementations

mod activity;
mod dashboard;
mod distribution;
mod donation;
mod error;
mod inventory;
mod user;

pub use activity::PgActivityLogRepository;
pub use dashboard::PgDashboardRepository;
pub use distribution::PgDistributionRepository;
pub use donation::PgDonationRepository;
pub use inventory::PgInventoryRepository;
pub use user::PgUserRepository;
