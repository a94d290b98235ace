//! Résumé persistence seam.
//!
//! The store is owned by the transport layer and injected through
//! `AppState`, never held as ambient state. Accepted records are appended to
//! a process-scoped list; the most recently saved record is additionally
//! dumped to a JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::resume::{ResumeRecord, StoredResume};

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Appends an accepted record, returning the stamped stored entry.
    async fn append(&self, record: ResumeRecord) -> anyhow::Result<StoredResume>;

    /// Returns all stored entries in insertion order.
    async fn list(&self) -> Vec<StoredResume>;
}

/// Process-scoped store: in-memory list plus a pretty-printed JSON dump of
/// the most recently saved record at a configured path.
pub struct JsonFileStore {
    records: Mutex<Vec<StoredResume>>,
    save_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(save_path: PathBuf) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            save_path,
        }
    }
}

#[async_trait]
impl ResumeStore for JsonFileStore {
    async fn append(&self, record: ResumeRecord) -> anyhow::Result<StoredResume> {
        let stored = StoredResume {
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            record,
        };

        self.records.lock().await.push(stored.clone());

        let json = serde_json::to_string_pretty(&stored)?;
        tokio::fs::write(&self.save_path, json).await?;

        Ok(stored)
    }

    async fn list(&self) -> Vec<StoredResume> {
        self.records.lock().await.clone()
    }
}
