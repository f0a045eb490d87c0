//! Admin account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use devhub_core::types::{DbId, Timestamp};

/// Full admin row from the `admin_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`AdminUserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
    pub id: DbId,
    pub username: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<AdminUser> for AdminUserResponse {
    fn from(user: AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new admin account.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdminUser {
    pub username: String,
    pub password_hash: String,
}
