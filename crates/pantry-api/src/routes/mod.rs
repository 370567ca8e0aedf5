//! Route definitions
//!
//! All API routes organized by resource and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{dashboard, distributions, donations, health, inventory, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(dashboard_routes())
        .merge(inventory_routes())
        .merge(donation_routes())
        .merge(distribution_routes())
}

/// Session routes
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/user", get(users::get_session_user))
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(dashboard::get_stats))
        .route(
            "/dashboard/recent-activity",
            get(dashboard::get_recent_activity),
        )
        .route("/dashboard/alerts", get(dashboard::get_alerts))
}

/// Inventory routes
fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/inventory", get(inventory::list_items))
        .route("/inventory", post(inventory::create_item))
        .route("/inventory/:id", get(inventory::get_item))
        .route("/inventory/:id", put(inventory::update_item))
        .route("/inventory/:id", delete(inventory::delete_item))
}

/// Donation routes
fn donation_routes() -> Router<AppState> {
    Router::new()
        .route("/donations", get(donations::list_donations))
        .route("/donations", post(donations::create_donation))
        .route("/donations/:id", get(donations::get_donation))
        .route("/donations/:id", put(donations::update_donation))
        .route("/donations/:id", delete(donations::delete_donation))
        .route("/donations/:id/items", get(donations::list_donation_items))
        .route("/donations/:id/items", post(donations::add_donation_item))
}

/// Distribution event routes
fn distribution_routes() -> Router<AppState> {
    Router::new()
        .route("/distributions", get(distributions::list_events))
        .route("/distributions", post(distributions::create_event))
        .route("/distributions/:id", get(distributions::get_event))
        .route("/distributions/:id", put(distributions::update_event))
        .route("/distributions/:id", delete(distributions::delete_event))
        .route(
            "/distributions/:id/items",
            get(distributions::list_event_items),
        )
        .route(
            "/distributions/:id/items",
            post(distributions::add_event_item),
        )
}
