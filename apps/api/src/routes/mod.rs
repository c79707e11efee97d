pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::admin::handlers as admin;
use crate::auth::handlers as auth;
use crate::documents::handlers as documents;
use crate::payments::handlers as payments;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route("/api/v1/auth/google", post(auth::handle_google_sign_in))
        .route("/api/v1/auth/refresh", post(auth::handle_refresh))
        .route("/api/v1/auth/me", get(auth::handle_me))
        .route("/api/v1/auth/logout", post(auth::handle_logout))
        // Templates
        .route("/api/v1/templates", get(documents::handle_list_templates))
        .route(
            "/api/v1/templates/select",
            post(documents::handle_select_template),
        )
        // Rendering
        .route("/api/v1/render/resume", post(documents::handle_render_resume))
        .route(
            "/api/v1/render/cover-letter",
            post(documents::handle_render_cover_letter),
        )
        // Documents
        .route(
            "/api/v1/resumes",
            get(documents::handle_list_resumes).post(documents::handle_save_resume),
        )
        .route(
            "/api/v1/resumes/generate",
            post(documents::handle_generate_resume),
        )
        .route(
            "/api/v1/cover-letters",
            get(documents::handle_list_cover_letters).post(documents::handle_save_cover_letter),
        )
        .route(
            "/api/v1/cover-letters/generate",
            post(documents::handle_generate_cover_letter),
        )
        // Payments
        .route(
            "/api/v1/payments/verify",
            get(payments::handle_verify_payment),
        )
        .route("/api/v1/plans", get(payments::handle_list_plans))
        // Admin
        .route("/api/v1/admin/stats", get(admin::handle_stats))
        .route("/api/v1/admin/users", get(admin::handle_users))
        .route("/api/v1/admin/users/:id", patch(admin::handle_update_user))
        .route("/api/v1/admin/documents", get(admin::handle_documents))
        .route(
            "/api/v1/admin/documents/:id",
            delete(admin::handle_delete_document),
        )
        .route("/api/v1/admin/webhook", post(admin::handle_update_webhook))
        .with_state(state)
}
