//! Auth client — the single point of entry for all identity-provider calls.
//!
//! The provider's wire protocol is opaque to the rest of the service: handlers
//! deal in `AuthSession` and `User` only. Subscription checks always go back
//! through `current_user` so gating sees live state.

pub mod handlers;

use axum::http::HeaderMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::user::{User, UserPatch};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session expired or invalid")]
    Unauthorized,

    #[error("Identity provider error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Explicit session object returned by every sign-in flow. One instance per
/// signed-in client; torn down by `logout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(15))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(format!("{}/v1/login", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        self.session_from(response).await
    }

    /// Exchanges a Google ID token for a provider session.
    pub async fn google_sign_in(&self, id_token: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(format!("{}/v1/google", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&json!({ "idToken": id_token }))
            .send()
            .await?;
        self.session_from(response).await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let response = self
            .client
            .post(format!("{}/v1/refresh", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&json!({ "refreshToken": refresh_token }))
            .send()
            .await?;
        self.session_from(response).await
    }

    /// Fetches the user behind an access token. This is the live-state read
    /// that template gating and admin checks rely on.
    pub async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        let response = self
            .client
            .get(format!("{}/v1/user", self.base_url))
            .header("x-api-key", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse(response).await
    }

    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(format!("{}/v1/logout", self.base_url))
            .header("x-api-key", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            debug!("Session revoked");
            Ok(())
        } else {
            Err(Self::status_error(status.as_u16(), response).await)
        }
    }

    /// Admin: full user listing.
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>, AuthError> {
        let response = self
            .client
            .get(format!("{}/v1/admin/users", self.base_url))
            .header("x-api-key", &self.api_key)
            .bearer_auth(token)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Admin: partial user update (subscription, admin flag, display name).
    pub async fn update_user(
        &self,
        token: &str,
        user_id: Uuid,
        patch: &UserPatch,
    ) -> Result<User, AuthError> {
        let response = self
            .client
            .patch(format!("{}/v1/admin/users/{user_id}", self.base_url))
            .header("x-api-key", &self.api_key)
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn session_from(&self, response: reqwest::Response) -> Result<AuthSession, AuthError> {
        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), response).await);
        }
        Ok(response.json().await?)
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AuthError> {
        let status = response.status();
        if status.as_u16() == 401 {
            return Err(AuthError::Unauthorized);
        }
        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), response).await);
        }
        Ok(response.json().await?)
    }

    async fn status_error(status: u16, response: reqwest::Response) -> AuthError {
        let message = response.text().await.unwrap_or_default();
        AuthError::Api { status, message }
    }
}

/// Extracts a bearer token from the Authorization header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_missing_or_malformed_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Token abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer ".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);
    }
}
