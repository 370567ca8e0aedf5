//! Data transfer objects for the HTTP API

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateDistributionEventRequest, CreateDistributionItemRequest, CreateDonationItemRequest,
    CreateDonationRequest, CreateInventoryItemRequest, ListDonationsQuery, ListEventsQuery,
    ListInventoryQuery, RecentActivityQuery, UpdateDistributionEventRequest,
    UpdateDonationRequest, UpdateInventoryItemRequest,
};
pub use responses::{
    ActivityLogResponse, AlertResponse, ApiResponse, DashboardStatsResponse,
    DistributionEventResponse, DistributionItemResponse, DonationItemResponse, DonationResponse,
    HealthChecks, HealthResponse, InventoryItemResponse, ReadinessResponse, UserResponse,
};
