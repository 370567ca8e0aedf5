//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
