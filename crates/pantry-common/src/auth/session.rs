//! Session token utilities
//!
//! The identity provider in front of the API hands the browser a signed
//! bearer token after login. This module encodes and validates those
//! tokens using the `jsonwebtoken` crate (HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use pantry_core::UserProfile;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity-provider user id)
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Profile fields carried by the token, used to upsert the user row
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.sub.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }
}

/// Service for encoding and validating session tokens
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl SessionService {
    /// Create a new session service with the given secret and token lifetime
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issue a session token carrying the user's profile
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_token(&self, profile: &UserProfile) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: profile.id.clone(),
            email: profile.email.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            profile_image_url: profile.profile_image_url.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))
    }

    /// Decode and validate a session token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
