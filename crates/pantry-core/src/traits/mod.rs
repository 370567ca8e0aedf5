//! Repository ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    ActivityLogRepository, DashboardRepository, DashboardStats, DistributionRepository,
    DonationQuery, DonationRepository, EventQuery, InventoryQuery, InventoryRepository,
    InventorySort, RepoResult, SortOrder, UserRepository,
};
