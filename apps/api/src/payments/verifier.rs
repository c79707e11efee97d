//! Payment verification calls against the external payment provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Payment provider error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Terminal payment state for one checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub paid: bool,
    pub plan: String,
}

/// Wire shape of `verifyPaymentSuccess(sessionId)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<PaymentStatus>,
    #[serde(default)]
    pub error: Option<String>,
}

impl VerifyResponse {
    /// A response is terminal only when the call succeeded and reports the
    /// session as paid. Anything else keeps the poller going.
    pub fn paid_status(&self) -> Option<&PaymentStatus> {
        if !self.success {
            return None;
        }
        self.data.as_ref().filter(|d| d.paid)
    }
}

/// Verification backend, abstracted so the poller can be driven by scripted
/// responses in tests.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    async fn verify(&self, session_id: &str) -> Result<VerifyResponse, PaymentError>;
}

pub struct HttpPaymentVerifier {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpPaymentVerifier {
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
}

#[async_trait]
impl PaymentVerifier for HttpPaymentVerifier {
    async fn verify(&self, session_id: &str) -> Result<VerifyResponse, PaymentError> {
        let response = self
            .client
            .get(format!("{}/v1/verify", self.base_url))
            .header("x-api-key", &self.api_key)
            .query(&[("session_id", session_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PaymentError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_status_requires_success_and_paid() {
        let paid = VerifyResponse {
            success: true,
            data: Some(PaymentStatus {
                paid: true,
                plan: "Pro Monthly".into(),
            }),
            error: None,
        };
        assert!(paid.paid_status().is_some());

        let unpaid = VerifyResponse {
            success: true,
            data: Some(PaymentStatus {
                paid: false,
                plan: String::new(),
            }),
            error: None,
        };
        assert!(unpaid.paid_status().is_none());

        let failed = VerifyResponse {
            success: false,
            data: Some(PaymentStatus {
                paid: true,
                plan: "Pro".into(),
            }),
            error: Some("pending".into()),
        };
        assert!(failed.paid_status().is_none());
    }
}
