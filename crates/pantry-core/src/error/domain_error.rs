//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Inventory item not found: {0}")]
    ItemNotFound(i32),

    #[error("Donation not found: {0}")]
    DonationNotFound(i32),

    #[error("Distribution event not found: {0}")]
    EventNotFound(i32),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ItemNotFound(_) => "UNKNOWN_INVENTORY_ITEM",
            Self::DonationNotFound(_) => "UNKNOWN_DONATION",
            Self::EventNotFound(_) => "UNKNOWN_DISTRIBUTION_EVENT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidField { .. } => "INVALID_FIELD",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ItemNotFound(_)
                | Self::DonationNotFound(_)
                | Self::EventNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidField { .. })
    }

    /// Create a validation error for a field that failed to parse
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }
}
