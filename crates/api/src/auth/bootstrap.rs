//! One-time default-admin bootstrap.
//!
//! Runs as an explicit startup step from `main`, never as a constructor
//! side effect: if no admin account exists yet, seed `admin` with the
//! injected default password so the review console is reachable on a
//! fresh database.

use devhub_core::error::CoreError;
use devhub_db::models::admin_user::CreateAdminUser;
use devhub_db::repositories::AdminUserRepo;
use devhub_db::DbPool;

use crate::auth::password::hash_password;

/// Create the fallback `admin` account if the admin_users table is empty.
///
/// Returns `true` when an account was created, `false` when admins already
/// exist and nothing was done.
pub async fn ensure_default_admin(
    pool: &DbPool,
    default_password: &str,
) -> Result<bool, CoreError> {
    let existing = AdminUserRepo::count(pool)
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))?;
    if existing > 0 {
        return Ok(false);
    }

    let password_hash =
        hash_password(default_password).map_err(|e| CoreError::Internal(e.to_string()))?;

    let admin = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            username: "admin".to_string(),
            password_hash,
        },
    )
    .await
    .map_err(|e| CoreError::Internal(e.to_string()))?;

    tracing::info!(admin_id = admin.id, "Default admin account created");
    Ok(true)
}
