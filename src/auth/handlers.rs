//! Auth HTTP handlers: register, login, current user.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use crate::auth::AuthAppService;
use crate::db::{user_create, user_find_by_email, UserRow};
use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::models::UserRole;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 255))]
    pub name: String,
    #[validate(length(max = 64))]
    pub phone: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user. The stored hash never appears here.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub role: String,
    pub created_at: String,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id.to_string(),
            email: row.email,
            name: row.name,
            phone: row.phone,
            // Canonicalize whatever the column holds.
            role: UserRole::from_name(&row.role).as_str().to_string(),
            created_at: row.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let password_hash = AuthAppService::hash_password(&body.password)?;
    // The insert is the duplicate check: ON CONFLICT DO NOTHING returns no
    // row when the email is already taken.
    let user = user_create(
        state.db(),
        &body.email,
        &body.name,
        &body.phone,
        body.role.as_str(),
        &password_hash,
    )
    .await?;
    let token = state.jwt_secret().issue(&user.email)?;

    info!(user_id = %user.id, "user registered");
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// POST /auth/login
///
/// Unknown email and wrong password collapse into the same error so the
/// response does not reveal which one occurred.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = user_find_by_email(state.db(), &body.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !AuthAppService::verify_password(&body.password, &user.password_hash)? {
        debug!(user_id = %user.id, "login rejected: password mismatch");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.jwt_secret().issue(&user.email)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// GET /auth/me — resolve the current user from a bearer token.
pub async fn me(
    State(state): State<AppState>,
    AuthUser(email): AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = user_find_by_email(state.db(), &email)
        .await?
        .ok_or(AppError::UserNotFound)?;
    Ok(Json(user.into()))
}
