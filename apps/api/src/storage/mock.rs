//! Mock backend: JSON-array files plus an artificial delay, simulating the
//! remote generation/save endpoints. Append-only, no dedup, no size bounds,
//! no cross-process locking — demo semantics, not production storage.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use crate::locale::Locale;
use crate::models::cover_letter::CoverLetterData;
use crate::models::resume::ResumeData;
use crate::models::DocumentKind;
use crate::storage::{DocumentStore, SavedDocument, StorageError};

const RESUMES_FILE: &str = "savedResumes.json";
const COVER_LETTERS_FILE: &str = "savedCoverLetters.json";

pub struct JsonFileStore {
    dir: PathBuf,
    /// Fixed artificial latency applied to every operation.
    delay: Duration,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>, delay: Duration) -> Self {
        Self {
            dir: dir.into(),
            delay,
        }
    }

    fn file_for(&self, kind: DocumentKind) -> PathBuf {
        match kind {
            DocumentKind::Resume => self.dir.join(RESUMES_FILE),
            DocumentKind::CoverLetter => self.dir.join(COVER_LETTERS_FILE),
        }
    }

    async fn read_all(&self, path: &Path) -> Result<Vec<SavedDocument>, StorageError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_all(&self, path: &Path, docs: &[SavedDocument]) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec_pretty(docs)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn list(&self, kind: DocumentKind) -> Result<Vec<SavedDocument>, StorageError> {
        self.simulate_latency().await;
        self.read_all(&self.file_for(kind)).await
    }

    async fn list_for_user(
        &self,
        kind: DocumentKind,
        user_id: &str,
    ) -> Result<Vec<SavedDocument>, StorageError> {
        let mut docs = self.list(kind).await?;
        docs.retain(|d| d.user_id == user_id);
        Ok(docs)
    }

    async fn get(
        &self,
        kind: DocumentKind,
        id: &str,
    ) -> Result<Option<SavedDocument>, StorageError> {
        let docs = self.list(kind).await?;
        Ok(docs.into_iter().find(|d| d.id == id))
    }

    async fn put(
        &self,
        kind: DocumentKind,
        user_id: &str,
        data: Value,
    ) -> Result<SavedDocument, StorageError> {
        self.simulate_latency().await;
        let path = self.file_for(kind);
        let mut docs = self.read_all(&path).await?;
        let now = Utc::now();
        let record = SavedDocument {
            id: now.timestamp_millis().to_string(),
            user_id: user_id.to_string(),
            data,
            created_at: now,
            last_updated: now,
        };
        docs.push(record.clone());
        self.write_all(&path, &docs).await?;
        debug!("Saved {} record {}", kind.as_str(), record.id);
        Ok(record)
    }

    async fn delete(&self, kind: DocumentKind, id: &str) -> Result<bool, StorageError> {
        self.simulate_latency().await;
        let path = self.file_for(kind);
        let mut docs = self.read_all(&path).await?;
        let before = docs.len();
        docs.retain(|d| d.id != id);
        if docs.len() == before {
            return Ok(false);
        }
        self.write_all(&path, &docs).await?;
        Ok(true)
    }
}

/// Fills the optional fields the user left empty with localized default copy.
/// This is the "generation" the mock service simulates.
pub fn fill_resume_defaults(data: &mut ResumeData, locale: Locale) {
    if data.summary.trim().is_empty() {
        data.summary = locale.default_summary().to_string();
    }
}

pub fn fill_cover_letter_defaults(data: &mut CoverLetterData, locale: Locale) {
    if data.experience.trim().is_empty() {
        data.experience = locale.default_letter_experience().to_string();
    }
    if data.skills.trim().is_empty() {
        data.skills = locale.default_letter_skills().to_string();
    }
    if data.motivation.trim().is_empty() {
        data.motivation = locale.default_letter_motivation().to_string();
    }
    if data.closing.trim().is_empty() {
        data.closing = locale.default_letter_closing().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path(), Duration::ZERO);
        (dir, store)
    }

    #[tokio::test]
    async fn test_put_then_list_round_trip() {
        let (_dir, store) = store();
        let saved = store
            .put(DocumentKind::Resume, "user-1", json!({"summary": "hi"}))
            .await
            .unwrap();
        assert_eq!(saved.user_id, "user-1");
        assert!(!saved.id.is_empty());

        let docs = store.list(DocumentKind::Resume).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].data["summary"], "hi");
    }

    #[tokio::test]
    async fn test_kinds_are_stored_separately() {
        let (_dir, store) = store();
        store
            .put(DocumentKind::Resume, "u", json!({}))
            .await
            .unwrap();
        assert!(store.list(DocumentKind::CoverLetter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_for_user_filters() {
        let (_dir, store) = store();
        store.put(DocumentKind::Resume, "a", json!({})).await.unwrap();
        store.put(DocumentKind::Resume, "b", json!({})).await.unwrap();
        let docs = store.list_for_user(DocumentKind::Resume, "a").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].user_id, "a");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_false_and_leaves_list_unchanged() {
        let (_dir, store) = store();
        store.put(DocumentKind::Resume, "u", json!({})).await.unwrap();
        let removed = store.delete(DocumentKind::Resume, "missing").await.unwrap();
        assert!(!removed);
        assert_eq!(store.list(DocumentKind::Resume).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_existing_id() {
        let (_dir, store) = store();
        let saved = store.put(DocumentKind::Resume, "u", json!({})).await.unwrap();
        assert!(store.delete(DocumentKind::Resume, &saved.id).await.unwrap());
        assert!(store.list(DocumentKind::Resume).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_lists_empty() {
        let (_dir, store) = store();
        assert!(store.list(DocumentKind::Resume).await.unwrap().is_empty());
    }

    #[test]
    fn test_fill_resume_defaults_only_touches_empty_fields() {
        let mut data = ResumeData {
            summary: "mine".into(),
            ..ResumeData::default()
        };
        fill_resume_defaults(&mut data, Locale::En);
        assert_eq!(data.summary, "mine");

        let mut empty = ResumeData::default();
        fill_resume_defaults(&mut empty, Locale::Fr);
        assert_eq!(empty.summary, Locale::Fr.default_summary());
    }

    #[test]
    fn test_fill_cover_letter_defaults() {
        let mut data = CoverLetterData {
            motivation: "keep me".into(),
            ..CoverLetterData::default()
        };
        fill_cover_letter_defaults(&mut data, Locale::En);
        assert_eq!(data.motivation, "keep me");
        assert_eq!(data.experience, Locale::En.default_letter_experience());
        assert_eq!(data.closing, Locale::En.default_letter_closing());
    }
}
