use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::bearer_token;
use crate::errors::AppError;
use crate::locale::{format_currency, Locale};
use crate::models::user::User;
use crate::models::ApiEnvelope;
use crate::payments::poller::PollOutcome;
use crate::payments::verifier::PaymentStatus;
use crate::payments::{Plan, PLANS};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VerifyQuery {
    pub session_id: String,
    #[serde(default)]
    pub locale: Option<Locale>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerified {
    pub payment: PaymentStatus,
    /// Re-fetched after confirmation so the client picks up the new
    /// subscription immediately.
    pub user: User,
}

/// GET /api/v1/payments/verify?session_id=...
///
/// Runs the bounded-retry poller for the returned checkout session. An
/// exhausted poll is a soft failure: HTTP 200 with `success: false` and a
/// user-facing notice, never a hard error.
pub async fn handle_verify_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<VerifyQuery>,
) -> Result<Json<ApiEnvelope<PaymentVerified>>, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;
    let locale = params.locale.unwrap_or(state.config.default_locale);

    match state.poller.poll(&params.session_id).await {
        PollOutcome::Succeeded(payment) => {
            info!(
                "Payment session {} confirmed (plan: {})",
                params.session_id, payment.plan
            );
            let user = state.auth.current_user(token).await?;
            Ok(Json(ApiEnvelope::ok(PaymentVerified { payment, user })))
        }
        PollOutcome::Exhausted => Ok(Json(ApiEnvelope::fail(
            locale.payment_unconfirmed_notice(),
        ))),
    }
}

#[derive(Deserialize)]
pub struct PlansQuery {
    #[serde(default)]
    pub locale: Option<Locale>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    #[serde(flatten)]
    pub plan: &'static Plan,
    /// Price formatted for the requested locale, e.g. "$9.99" / "9,99 €".
    pub price: String,
}

/// GET /api/v1/plans
pub async fn handle_list_plans(
    State(state): State<AppState>,
    Query(params): Query<PlansQuery>,
) -> Json<Vec<PlanView>> {
    let locale = params.locale.unwrap_or(state.config.default_locale);
    Json(
        PLANS
            .iter()
            .map(|plan| PlanView {
                plan,
                price: format_currency(plan.price_cents, locale),
            })
            .collect(),
    )
}
