use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::AuthClient;
use crate::config::Config;
use crate::payments::poller::PaymentPoller;
use crate::storage::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub auth: AuthClient,
    /// Repository behind the document endpoints. The mock JSON store by
    /// default; a real backend plugs in behind the same trait.
    pub store: Arc<dyn DocumentStore>,
    pub poller: Arc<PaymentPoller>,
    /// Webhook endpoints configured through the admin panel, keyed by event type.
    pub webhooks: Arc<RwLock<HashMap<String, String>>>,
}
