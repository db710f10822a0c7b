use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::core::contact::{ContactForm, StoredSubmission, SubmissionStore, reference_for};

/// In-memory submission store, used when no data directory is available.
#[derive(Default)]
pub struct MemorySubmissionStore {
    inner: Mutex<Vec<StoredSubmission>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn save(&self, form: &ContactForm) -> Result<String> {
        let mut submissions = self.inner.lock().await;
        let reference = reference_for(submissions.len() as u64 + 1);
        submissions.push(StoredSubmission {
            reference: reference.clone(),
            submitted_at: Utc::now(),
            form: form.clone(),
        });
        debug!(%reference, "Stored submission in memory");
        Ok(reference)
    }

    async fn list(&self) -> Result<Vec<StoredSubmission>> {
        Ok(self.inner.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemorySubmissionStore::new();
        let form = ContactForm {
            name: "Lena".to_string(),
            email: "lena@example.com".to_string(),
            subject: "Coursework".to_string(),
            message: "Statistics assignment".to_string(),
            ..Default::default()
        };

        assert_eq!(store.save(&form).await.unwrap(), "Q-000001");
        assert_eq!(store.save(&form).await.unwrap(), "Q-000002");

        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].form, form);
    }
}
