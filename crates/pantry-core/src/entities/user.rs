//! User entity - a volunteer or admin account provisioned by the identity provider

use chrono::{DateTime, Utc};

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Volunteer,
    Admin,
}

impl UserRole {
    /// Parse a role from its stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "volunteer" => Some(Self::Volunteer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// User entity
///
/// The id is the identity provider's subject claim; accounts are created and
/// refreshed by upsert, never through a local registration flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name: "First Last", falling back to email, then id
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self
                .email
                .clone()
                .unwrap_or_else(|| self.id.clone()),
        }
    }
}

/// Profile fields carried by the identity provider, used for upsert
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserProfile {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}
