//! Repository for the `admin_users` table.

use sqlx::PgPool;

use crate::models::admin_user::{AdminUser, CreateAdminUser};

/// Column list shared across queries.
const COLUMNS: &str = "id, username, password_hash, is_active, created_at, updated_at";

/// Provides CRUD operations for admin accounts.
pub struct AdminUserRepo;

impl AdminUserRepo {
    /// Insert a new admin account, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAdminUser) -> Result<AdminUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_users (username, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find an active admin by username.
    pub async fn find_active_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admin_users WHERE username = $1 AND is_active = TRUE"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Total number of admin accounts (active or not). Used by the
    /// default-admin bootstrap to decide whether to seed.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin_users")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
