use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use crate::auth::{bearer_token, AuthSession};
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthSession>, AppError> {
    let session = state.auth.login(&req.email, &req.password).await?;
    info!("User {} signed in", session.user.id);
    Ok(Json(session))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSignInRequest {
    pub id_token: String,
}

/// POST /api/v1/auth/google
pub async fn handle_google_sign_in(
    State(state): State<AppState>,
    Json(req): Json<GoogleSignInRequest>,
) -> Result<Json<AuthSession>, AppError> {
    let session = state.auth.google_sign_in(&req.id_token).await?;
    info!("User {} signed in via Google", session.user.id);
    Ok(Json(session))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// POST /api/v1/auth/refresh
pub async fn handle_refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<AuthSession>, AppError> {
    let session = state.auth.refresh(&req.refresh_token).await?;
    Ok(Json(session))
}

/// GET /api/v1/auth/me — current user behind the bearer token.
pub async fn handle_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<User>, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;
    let user = state.auth.current_user(token).await?;
    Ok(Json(user))
}

/// POST /api/v1/auth/logout — tears the session down at the provider.
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;
    state.auth.logout(token).await?;
    Ok(StatusCode::NO_CONTENT)
}
