//! # pantry-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services orchestrate the repository ports from `pantry-core` and own the
//! activity-log side effect: every successful mutation of a primary entity
//! appends exactly one audit row.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    DashboardService, DistributionService, DonationService, InventoryService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
