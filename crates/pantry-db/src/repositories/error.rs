//! Error handling utilities for repositories

use pantry_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create an "inventory item not found" error
pub fn item_not_found(id: i32) -> DomainError {
    DomainError::ItemNotFound(id)
}

/// Create a "donation not found" error
pub fn donation_not_found(id: i32) -> DomainError {
    DomainError::DonationNotFound(id)
}

/// Create a "distribution event not found" error
pub fn event_not_found(id: i32) -> DomainError {
    DomainError::EventNotFound(id)
}
