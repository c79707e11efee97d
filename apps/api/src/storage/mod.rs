//! Document persistence behind one repository contract, so the mock JSON
//! store and a real backend are interchangeable.

pub mod mock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::DocumentKind;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// One persisted document record. `data` holds the raw document model as
/// submitted; the store never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument {
    pub id: String,
    pub user_id: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Repository contract shared by the mock store and any real backend.
/// Last write wins; no versioning or conflict resolution.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list(&self, kind: DocumentKind) -> Result<Vec<SavedDocument>, StorageError>;

    async fn list_for_user(
        &self,
        kind: DocumentKind,
        user_id: &str,
    ) -> Result<Vec<SavedDocument>, StorageError>;

    async fn get(&self, kind: DocumentKind, id: &str)
        -> Result<Option<SavedDocument>, StorageError>;

    /// Appends a new record with a timestamp-derived id.
    async fn put(
        &self,
        kind: DocumentKind,
        user_id: &str,
        data: Value,
    ) -> Result<SavedDocument, StorageError>;

    /// Returns `true` when a record was removed, `false` when the id was
    /// unknown. Unknown ids are not an error.
    async fn delete(&self, kind: DocumentKind, id: &str) -> Result<bool, StorageError>;
}
