//! Handlers for admin authentication.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use devhub_core::error::CoreError;
use devhub_db::models::admin_user::{AdminUserResponse, CreateAdminUser};
use devhub_db::repositories::AdminUserRepo;

use crate::auth::credentials::parse_credentials;
use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Request / response types
-------------------------------------------------------------------------- */

/// The console sends the combined `username-password` string in a single
/// field.
#[derive(Debug, serde::Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, serde::Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub message: &'static str,
}

#[derive(Debug, serde::Deserialize)]
pub struct CreateAdminRequest {
    pub username: String,
    pub password: String,
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let Some((username, password)) = parse_credentials(&input.password) else {
        return Err(AppError::BadRequest(
            "INVALID_FORMAT",
            "Invalid credential format. Expected: username-password".to_string(),
        ));
    };

    let invalid =
        || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let admin = AdminUserRepo::find_active_by_username(&state.pool, username)
        .await?
        .ok_or_else(invalid)?;

    let verified = verify_password(password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    if !verified {
        return Err(invalid());
    }

    let token = generate_access_token(admin.id, &admin.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "Admin logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            token,
            message: "Login successful",
        },
    }))
}

/// POST /api/v1/auth/admin
///
/// Create an additional admin account. Requires authentication; the
/// username unique constraint rejects duplicates.
pub async fn create_admin(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAdminRequest>,
) -> AppResult<impl IntoResponse> {
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::BadRequest("WEAK_PASSWORD", msg))?;

    let password_hash =
        hash_password(&input.password).map_err(|e| AppError::InternalError(e.to_string()))?;

    let admin = AdminUserRepo::create(
        &state.pool,
        &CreateAdminUser {
            username: input.username,
            password_hash,
        },
    )
    .await?;

    tracing::info!(
        created_by = auth.user_id,
        admin_id = admin.id,
        username = %admin.username,
        "Admin account created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AdminUserResponse::from(admin),
        }),
    ))
}
