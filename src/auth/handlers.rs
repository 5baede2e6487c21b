//! Authentication handlers

use axum::extract::{Extension, Json};
use axum::http::StatusCode;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::extractors::AuthedUser;
use super::models::{LoginRequest, RefreshRequest, RegisterRequest};
use super::service::AuthService;
use crate::common::{ApiError, AppState};

/// POST /api/auth/register
/// Creates an account and returns the initial token pair
///
/// # Request Body
/// ```json
/// {
///   "name": "Jane",
///   "email": "jane@example.com",
///   "password": "secret",
///   "dob": "1995-04-02"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "accessToken": "<jwt>",
///   "refreshToken": "<jwt>",
///   "message": "Account created successfully"
/// }
/// ```
pub async fn register_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let state = state_lock.read().await.clone();
    let service = AuthService::new(state.db.clone(), state.auth.clone());

    let pair = service.register(payload).await?;

    let resp = serde_json::json!({
        "accessToken": pair.access_token,
        "refreshToken": pair.refresh_token,
        "message": "Account created successfully",
    });

    Ok((StatusCode::CREATED, Json(resp)))
}

/// POST /api/auth/login
/// Verifies credentials and returns a fresh token pair
pub async fn login_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    let service = AuthService::new(state.db.clone(), state.auth.clone());

    let pair = service.login(&payload.email, &payload.password).await?;

    let resp = serde_json::json!({
        "accessToken": pair.access_token,
        "refreshToken": pair.refresh_token,
        "message": "Login successful",
    });

    Ok(Json(resp))
}

/// POST /api/auth/refresh-token
/// Rotates the refresh token and returns a new pair
///
/// # Request Body
/// ```json
/// { "refreshToken": "<jwt>" }
/// ```
pub async fn refresh_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    let service = AuthService::new(state.db.clone(), state.auth.clone());

    let pair = service.refresh(&payload.refresh_token).await?;

    let resp = serde_json::json!({
        "accessToken": pair.access_token,
        "refreshToken": pair.refresh_token,
    });

    Ok(Json(resp))
}

/// GET /api/me
/// Returns the current authenticated user's information, secrets excluded
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    let service = AuthService::new(state.db.clone(), state.auth.clone());

    let user = service.current_user(&authed.identifier).await?;

    let is_admin = state.admin_emails.contains(&user.email.to_lowercase());

    let resp = serde_json::json!({
        "user": user,
        "is_admin": is_admin,
    });

    Ok(Json(resp))
}

/// POST /api/auth/logout
/// Clears the stored refresh token, ending the session server-side
pub async fn logout_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    let service = AuthService::new(state.db.clone(), state.auth.clone());

    service.logout(&authed.identifier).await?;

    info!(user_id = %authed.identifier, "Logout successful");

    let resp = serde_json::json!({
        "message": "Logout successful"
    });

    Ok(Json(resp))
}
