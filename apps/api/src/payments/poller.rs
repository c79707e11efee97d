//! Bounded-retry verification poller: `pending → {succeeded | exhausted}`.
//!
//! One verification request is in flight at a time. A session cache keyed by
//! checkout session id short-circuits repeat verifications without touching
//! the network. Cancellation is structural: dropping the poll future drops
//! the pending delay, so no timer outlives its caller.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::payments::verifier::{PaymentStatus, PaymentVerifier};

pub const POLL_INTERVAL: Duration = Duration::from_secs(3);
pub const MAX_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// Payment confirmed. Carried exactly once per session; later calls for
    /// the same session replay this from the cache.
    Succeeded(PaymentStatus),
    /// Attempt budget spent without a terminal response.
    Exhausted,
}

pub struct PaymentPoller {
    verifier: Arc<dyn PaymentVerifier>,
    verified: RwLock<HashMap<String, PaymentStatus>>,
    interval: Duration,
    max_attempts: u32,
}

impl PaymentPoller {
    pub fn new(verifier: Arc<dyn PaymentVerifier>) -> Self {
        Self::with_timing(verifier, POLL_INTERVAL, MAX_ATTEMPTS)
    }

    pub fn with_timing(
        verifier: Arc<dyn PaymentVerifier>,
        interval: Duration,
        max_attempts: u32,
    ) -> Self {
        Self {
            verifier,
            verified: RwLock::new(HashMap::new()),
            interval,
            max_attempts,
        }
    }

    /// Runs the verification state machine for one session to completion.
    pub async fn poll(&self, session_id: &str) -> PollOutcome {
        if let Some(cached) = self.verified.read().await.get(session_id) {
            debug!("Session {session_id} already verified, short-circuiting");
            return PollOutcome::Succeeded(cached.clone());
        }

        for attempt in 1..=self.max_attempts {
            match self.verifier.verify(session_id).await {
                Ok(response) => {
                    if let Some(status) = response.paid_status() {
                        debug!("Session {session_id} verified on attempt {attempt}");
                        self.verified
                            .write()
                            .await
                            .insert(session_id.to_string(), status.clone());
                        return PollOutcome::Succeeded(status.clone());
                    }
                    debug!("Session {session_id} not yet paid (attempt {attempt})");
                }
                Err(e) => {
                    // Transient failures spend an attempt like any other
                    // non-terminal response.
                    warn!("Verification attempt {attempt} for {session_id} failed: {e}");
                }
            }
            if attempt < self.max_attempts {
                tokio::time::sleep(self.interval).await;
            }
        }

        warn!(
            "Session {session_id} unverified after {} attempts",
            self.max_attempts
        );
        PollOutcome::Exhausted
    }

    /// Whether a session has already been confirmed in this process.
    pub async fn is_verified(&self, session_id: &str) -> bool {
        self.verified.read().await.contains_key(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payments::verifier::{PaymentError, VerifyResponse};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::sync::Mutex;

    fn pending() -> VerifyResponse {
        VerifyResponse {
            success: true,
            data: Some(PaymentStatus {
                paid: false,
                plan: String::new(),
            }),
            error: None,
        }
    }

    fn paid() -> VerifyResponse {
        VerifyResponse {
            success: true,
            data: Some(PaymentStatus {
                paid: true,
                plan: "Pro Monthly".into(),
            }),
            error: None,
        }
    }

    /// Replays a scripted response sequence and counts requests.
    struct Scripted {
        responses: Mutex<VecDeque<Result<VerifyResponse, PaymentError>>>,
        calls: AtomicU32,
    }

    impl Scripted {
        fn new(responses: Vec<Result<VerifyResponse, PaymentError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PaymentVerifier for Scripted {
        async fn verify(&self, _session_id: &str) -> Result<VerifyResponse, PaymentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .await
                .pop_front()
                .unwrap_or_else(|| Ok(pending()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_success_polls_once() {
        let verifier = Scripted::new(vec![Ok(paid())]);
        let poller = PaymentPoller::new(verifier.clone());
        let outcome = poller.poll("sess_1").await;
        assert!(matches!(outcome, PollOutcome::Succeeded(s) if s.plan == "Pro Monthly"));
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_pending_responses() {
        let verifier = Scripted::new(vec![Ok(pending()), Ok(pending()), Ok(paid())]);
        let poller = PaymentPoller::new(verifier.clone());
        let outcome = poller.poll("sess_2").await;
        assert!(matches!(outcome, PollOutcome::Succeeded(_)));
        // No further requests after the terminal response.
        assert_eq!(verifier.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_after_max_attempts() {
        let responses = (0..MAX_ATTEMPTS).map(|_| Ok(pending())).collect();
        let verifier = Scripted::new(responses);
        let poller = PaymentPoller::new(verifier.clone());
        let outcome = poller.poll("sess_3").await;
        assert_eq!(outcome, PollOutcome::Exhausted);
        assert_eq!(verifier.calls(), MAX_ATTEMPTS);
        assert!(!poller.is_verified("sess_3").await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_errors_spend_attempts() {
        let verifier = Scripted::new(vec![
            Err(PaymentError::Api {
                status: 503,
                message: "unavailable".into(),
            }),
            Ok(paid()),
        ]);
        let poller = PaymentPoller::new(verifier.clone());
        let outcome = poller.poll("sess_4").await;
        assert!(matches!(outcome, PollOutcome::Succeeded(_)));
        assert_eq!(verifier.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_verified_session_short_circuits_without_requests() {
        let verifier = Scripted::new(vec![Ok(paid())]);
        let poller = PaymentPoller::new(verifier.clone());
        assert!(matches!(poller.poll("sess_5").await, PollOutcome::Succeeded(_)));
        assert_eq!(verifier.calls(), 1);

        // Second run replays the cache; no new network traffic.
        assert!(matches!(poller.poll("sess_5").await, PollOutcome::Succeeded(_)));
        assert_eq!(verifier.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_is_per_session() {
        let verifier = Scripted::new(vec![Ok(paid()), Ok(paid())]);
        let poller = PaymentPoller::new(verifier.clone());
        poller.poll("sess_a").await;
        poller.poll("sess_b").await;
        assert_eq!(verifier.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_poll_future_stops_requests() {
        let verifier = Scripted::new(vec![Ok(pending()), Ok(paid())]);
        let poller = Arc::new(PaymentPoller::new(verifier.clone()));

        let handle = {
            let poller = poller.clone();
            tokio::spawn(async move { poller.poll("sess_6").await })
        };
        // Let the first request land, then cancel mid-delay.
        while verifier.calls() == 0 {
            tokio::task::yield_now().await;
        }
        handle.abort();
        assert!(handle.await.is_err());

        tokio::time::advance(POLL_INTERVAL * 3).await;
        tokio::task::yield_now().await;
        assert_eq!(verifier.calls(), 1);
    }
}
