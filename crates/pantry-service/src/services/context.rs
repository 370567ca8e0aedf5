//! Service context - dependency container for services
//!
//! Holds the repository ports needed by services. Constructed once at
//! startup and shared behind the API state.

use std::sync::Arc;

use pantry_core::traits::{
    ActivityLogRepository, DashboardRepository, DistributionRepository, DonationRepository,
    InventoryRepository, UserRepository,
};

/// Service context containing all repository dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    inventory_repo: Arc<dyn InventoryRepository>,
    donation_repo: Arc<dyn DonationRepository>,
    distribution_repo: Arc<dyn DistributionRepository>,
    activity_repo: Arc<dyn ActivityLogRepository>,
    dashboard_repo: Arc<dyn DashboardRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        inventory_repo: Arc<dyn InventoryRepository>,
        donation_repo: Arc<dyn DonationRepository>,
        distribution_repo: Arc<dyn DistributionRepository>,
        activity_repo: Arc<dyn ActivityLogRepository>,
        dashboard_repo: Arc<dyn DashboardRepository>,
    ) -> Self {
        Self {
            user_repo,
            inventory_repo,
            donation_repo,
            distribution_repo,
            activity_repo,
            dashboard_repo,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the inventory repository
    pub fn inventory_repo(&self) -> &dyn InventoryRepository {
        self.inventory_repo.as_ref()
    }

    /// Get the donation repository
    pub fn donation_repo(&self) -> &dyn DonationRepository {
        self.donation_repo.as_ref()
    }

    /// Get the distribution repository
    pub fn distribution_repo(&self) -> &dyn DistributionRepository {
        self.distribution_repo.as_ref()
    }

    /// Get the activity log repository
    pub fn activity_repo(&self) -> &dyn ActivityLogRepository {
        self.activity_repo.as_ref()
    }

    /// Get the dashboard repository
    pub fn dashboard_repo(&self) -> &dyn DashboardRepository {
        self.dashboard_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    inventory_repo: Option<Arc<dyn InventoryRepository>>,
    donation_repo: Option<Arc<dyn DonationRepository>>,
    distribution_repo: Option<Arc<dyn DistributionRepository>>,
    activity_repo: Option<Arc<dyn ActivityLogRepository>>,
    dashboard_repo: Option<Arc<dyn DashboardRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn inventory_repo(mut self, repo: Arc<dyn InventoryRepository>) -> Self {
        self.inventory_repo = Some(repo);
        self
    }

    pub fn donation_repo(mut self, repo: Arc<dyn DonationRepository>) -> Self {
        self.donation_repo = Some(repo);
        self
    }

    pub fn distribution_repo(mut self, repo: Arc<dyn DistributionRepository>) -> Self {
        self.distribution_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityLogRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn dashboard_repo(mut self, repo: Arc<dyn DashboardRepository>) -> Self {
        self.dashboard_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.inventory_repo
                .ok_or_else(|| ServiceError::validation("inventory_repo is required"))?,
            self.donation_repo
                .ok_or_else(|| ServiceError::validation("donation_repo is required"))?,
            self.distribution_repo
                .ok_or_else(|| ServiceError::validation("distribution_repo is required"))?,
            self.activity_repo
                .ok_or_else(|| ServiceError::validation("activity_repo is required"))?,
            self.dashboard_repo
                .ok_or_else(|| ServiceError::validation("dashboard_repo is required"))?,
        ))
    }
}
