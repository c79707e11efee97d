use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::admin::filter::matches_query;
use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::models::user::{User, UserPatch};
use crate::models::{ApiEnvelope, DocumentKind};
use crate::state::AppState;
use crate::storage::SavedDocument;

/// Resolves the caller and rejects non-admins. Returns the token alongside
/// the user so provider-side admin calls can reuse it.
async fn require_admin<'a>(
    state: &AppState,
    headers: &'a HeaderMap,
) -> Result<(&'a str, User), AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;
    let user = state.auth.current_user(token).await?;
    if !user.is_admin {
        return Err(AppError::Forbidden);
    }
    Ok((token, user))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub users: usize,
    pub resumes: usize,
    pub cover_letters: usize,
}

/// GET /api/v1/admin/stats
pub async fn handle_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiEnvelope<DashboardStats>>, AppError> {
    let (token, _) = require_admin(&state, &headers).await?;
    let users = state.auth.list_users(token).await?.len();
    let resumes = state.store.list(DocumentKind::Resume).await?.len();
    let cover_letters = state.store.list(DocumentKind::CoverLetter).await?.len();
    Ok(Json(ApiEnvelope::ok(DashboardStats {
        users,
        resumes,
        cover_letters,
    })))
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /api/v1/admin/users
pub async fn handle_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListQuery>,
) -> Result<Json<ApiEnvelope<Vec<User>>>, AppError> {
    let (token, _) = require_admin(&state, &headers).await?;
    let mut users = state.auth.list_users(token).await?;
    if let Some(q) = params.q.as_deref() {
        users.retain(|u| {
            matches_query(
                q,
                &[u.email.as_str(), u.display_name.as_deref().unwrap_or("")],
            )
        });
    }
    Ok(Json(ApiEnvelope::ok(users)))
}

#[derive(Deserialize)]
pub struct DocumentListQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub doc_type: Option<DocumentKind>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDocument {
    pub kind: DocumentKind,
    #[serde(flatten)]
    pub document: SavedDocument,
}

/// Display fields a document is filtered on: its ids plus the owner name and
/// email embedded in the document data, when present.
fn document_fields(doc: &SavedDocument) -> Vec<&str> {
    let mut fields = vec![doc.id.as_str(), doc.user_id.as_str()];
    let personal = &doc.data["personalInfo"];
    for key in ["name", "email"] {
        if let Some(Value::String(s)) = personal.get(key) {
            fields.push(s.as_str());
        }
    }
    fields
}

/// GET /api/v1/admin/documents
pub async fn handle_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<DocumentListQuery>,
) -> Result<Json<ApiEnvelope<Vec<AdminDocument>>>, AppError> {
    require_admin(&state, &headers).await?;

    let kinds: &[DocumentKind] = match params.doc_type {
        Some(DocumentKind::Resume) => &[DocumentKind::Resume],
        Some(DocumentKind::CoverLetter) => &[DocumentKind::CoverLetter],
        None => &[DocumentKind::Resume, DocumentKind::CoverLetter],
    };

    let mut documents = Vec::new();
    for &kind in kinds {
        for document in state.store.list(kind).await? {
            let keep = params
                .q
                .as_deref()
                .map(|q| matches_query(q, &document_fields(&document)))
                .unwrap_or(true);
            if keep {
                documents.push(AdminDocument { kind, document });
            }
        }
    }
    Ok(Json(ApiEnvelope::ok(documents)))
}

#[derive(Deserialize)]
pub struct DeleteDocumentQuery {
    pub doc_type: DocumentKind,
}

/// DELETE /api/v1/admin/documents/:id
/// A miss reports `success: false` and changes nothing.
pub async fn handle_delete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<DeleteDocumentQuery>,
) -> Result<Json<ApiEnvelope<Value>>, AppError> {
    require_admin(&state, &headers).await?;
    let removed = state.store.delete(params.doc_type, &id).await?;
    if removed {
        info!("Admin deleted {} document {id}", params.doc_type.as_str());
        Ok(Json(ApiEnvelope::ok(json!({ "id": id }))))
    } else {
        Ok(Json(ApiEnvelope::fail(format!("Document {id} not found"))))
    }
}

/// PATCH /api/v1/admin/users/:id
pub async fn handle_update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<ApiEnvelope<User>>, AppError> {
    let (token, _) = require_admin(&state, &headers).await?;
    let updated = state.auth.update_user(token, id, &patch).await?;
    info!("Admin updated user {id}");
    Ok(Json(ApiEnvelope::ok(updated)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookUpdate {
    /// Event type the webhook fires on, e.g. "payment" or "signup".
    pub event_type: String,
    pub url: String,
}

/// POST /api/v1/admin/webhook
pub async fn handle_update_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<WebhookUpdate>,
) -> Result<Json<ApiEnvelope<Value>>, AppError> {
    require_admin(&state, &headers).await?;
    if req.url.trim().is_empty() {
        return Err(AppError::Validation("Webhook URL must not be empty".into()));
    }
    state
        .webhooks
        .write()
        .await
        .insert(req.event_type.clone(), req.url.clone());
    info!("Webhook for '{}' set to {}", req.event_type, req.url);
    Ok(Json(ApiEnvelope::ok(json!({
        "eventType": req.event_type,
        "url": req.url,
    }))))
}
