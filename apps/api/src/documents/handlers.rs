use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::bearer_token;
use crate::documents::catalog::{find_template, list_templates, TemplateDescriptor};
use crate::documents::gate::{select_template, TemplateSelection};
use crate::documents::render::{
    letter_layout, render_cover_letter, render_resume, resume_layout, RenderMode,
};
use crate::errors::AppError;
use crate::locale::Locale;
use crate::models::cover_letter::CoverLetterData;
use crate::models::resume::ResumeData;
use crate::models::user::User;
use crate::models::{ApiEnvelope, DocumentKind};
use crate::state::AppState;
use crate::storage::mock::{fill_cover_letter_defaults, fill_resume_defaults};
use crate::storage::{SavedDocument, StorageError};

/// Resolves the caller to a user when a bearer token is present. Anonymous
/// callers are fine for listing and selection; gating treats them as having
/// no subscription.
async fn optional_user(state: &AppState, headers: &HeaderMap) -> Result<Option<User>, AppError> {
    match bearer_token(headers) {
        Some(token) => Ok(Some(state.auth.current_user(token).await?)),
        None => Ok(None),
    }
}

async fn required_user(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;
    Ok(state.auth.current_user(token).await?)
}

#[derive(Deserialize)]
pub struct TemplateListQuery {
    pub doc_type: DocumentKind,
    #[serde(default)]
    pub include_premium: bool,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    Query(params): Query<TemplateListQuery>,
) -> Json<Vec<&'static TemplateDescriptor>> {
    Json(list_templates(params.doc_type, params.include_premium))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectTemplateRequest {
    pub doc_type: DocumentKind,
    pub template_id: String,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// POST /api/v1/templates/select
/// Access is evaluated against the user's live subscription state; a gated
/// template without access returns a soft-deny, not an error.
pub async fn handle_select_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<SelectTemplateRequest>,
) -> Result<Json<TemplateSelection>, AppError> {
    let user = optional_user(&state, &headers).await?;
    let locale = req.locale.unwrap_or(state.config.default_locale);
    let selection = select_template(req.doc_type, &req.template_id, user.as_ref(), locale)
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown {} template '{}'",
                req.doc_type.as_str(),
                req.template_id
            ))
        })?;
    Ok(Json(selection))
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub html: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResumeRequest {
    pub data: ResumeData,
    #[serde(default)]
    pub mode: RenderMode,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// POST /api/v1/render/resume
pub async fn handle_render_resume(
    State(state): State<AppState>,
    Json(req): Json<RenderResumeRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let style = resume_layout(&req.data.template).ok_or_else(|| {
        AppError::Validation(format!("Unknown resume template '{}'", req.data.template))
    })?;
    let locale = req.locale.unwrap_or(state.config.default_locale);
    Ok(Json(RenderResponse {
        html: render_resume(&req.data, style, locale, req.mode),
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderCoverLetterRequest {
    pub data: CoverLetterData,
    #[serde(default)]
    pub mode: RenderMode,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// POST /api/v1/render/cover-letter
pub async fn handle_render_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<RenderCoverLetterRequest>,
) -> Result<Json<RenderResponse>, AppError> {
    let style = letter_layout(&req.data.template).ok_or_else(|| {
        AppError::Validation(format!(
            "Unknown cover letter template '{}'",
            req.data.template
        ))
    })?;
    let locale = req.locale.unwrap_or(state.config.default_locale);
    Ok(Json(RenderResponse {
        html: render_cover_letter(&req.data, style, locale, req.mode),
    }))
}

fn validate_template(kind: DocumentKind, template: &str) -> Result<(), AppError> {
    if find_template(kind, template).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown {} template '{template}'",
            kind.as_str()
        )));
    }
    Ok(())
}

async fn save(
    state: &AppState,
    user: &User,
    kind: DocumentKind,
    data: impl Serialize,
) -> Result<SavedDocument, AppError> {
    let value = serde_json::to_value(data).map_err(StorageError::Corrupt)?;
    let saved = state
        .store
        .put(kind, &user.id.to_string(), value)
        .await?;
    Ok(saved)
}

/// POST /api/v1/resumes — persists the submitted resume as-is.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(data): Json<ResumeData>,
) -> Result<Json<ApiEnvelope<SavedDocument>>, AppError> {
    let user = required_user(&state, &headers).await?;
    validate_template(DocumentKind::Resume, &data.template)?;
    let saved = save(&state, &user, DocumentKind::Resume, &data).await?;
    Ok(Json(ApiEnvelope::ok(saved)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResumeRequest {
    pub data: ResumeData,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// POST /api/v1/resumes/generate — the mock generation flow: default-fill
/// empty optional fields, then persist.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<GenerateResumeRequest>,
) -> Result<Json<ApiEnvelope<SavedDocument>>, AppError> {
    let user = required_user(&state, &headers).await?;
    validate_template(DocumentKind::Resume, &req.data.template)?;
    let locale = req.locale.unwrap_or(state.config.default_locale);
    let mut data = req.data;
    fill_resume_defaults(&mut data, locale);
    let saved = save(&state, &user, DocumentKind::Resume, &data).await?;
    Ok(Json(ApiEnvelope::ok(saved)))
}

/// GET /api/v1/resumes — the caller's saved resumes.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiEnvelope<Vec<SavedDocument>>>, AppError> {
    let user = required_user(&state, &headers).await?;
    let docs = state
        .store
        .list_for_user(DocumentKind::Resume, &user.id.to_string())
        .await?;
    Ok(Json(ApiEnvelope::ok(docs)))
}

/// POST /api/v1/cover-letters
pub async fn handle_save_cover_letter(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(data): Json<CoverLetterData>,
) -> Result<Json<ApiEnvelope<SavedDocument>>, AppError> {
    let user = required_user(&state, &headers).await?;
    validate_template(DocumentKind::CoverLetter, &data.template)?;
    let saved = save(&state, &user, DocumentKind::CoverLetter, &data).await?;
    Ok(Json(ApiEnvelope::ok(saved)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCoverLetterRequest {
    pub data: CoverLetterData,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// POST /api/v1/cover-letters/generate
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<GenerateCoverLetterRequest>,
) -> Result<Json<ApiEnvelope<SavedDocument>>, AppError> {
    let user = required_user(&state, &headers).await?;
    validate_template(DocumentKind::CoverLetter, &req.data.template)?;
    let locale = req.locale.unwrap_or(state.config.default_locale);
    let mut data = req.data;
    fill_cover_letter_defaults(&mut data, locale);
    let saved = save(&state, &user, DocumentKind::CoverLetter, &data).await?;
    Ok(Json(ApiEnvelope::ok(saved)))
}

/// GET /api/v1/cover-letters
pub async fn handle_list_cover_letters(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiEnvelope<Vec<SavedDocument>>>, AppError> {
    let user = required_user(&state, &headers).await?;
    let docs = state
        .store
        .list_for_user(DocumentKind::CoverLetter, &user.id.to_string())
        .await?;
    Ok(Json(ApiEnvelope::ok(docs)))
}
