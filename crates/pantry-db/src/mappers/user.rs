//! User entity <-> model mapper

use pantry_core::entities::{User, UserRole};

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// An unrecognized role column falls back to the volunteer default.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            role: UserRole::parse(&model.role).unwrap_or_default(),
            id: model.id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            profile_image_url: model.profile_image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
