use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tokio::sync::Mutex;
use tracing::debug;

use crate::core::contact::{ContactForm, StoredSubmission, SubmissionStore, reference_for};

const PARTITION: &str = "submissions";

/// Submissions kept in a fjall partition, keyed by big-endian sequence number
/// so iteration order is submission order.
pub struct DiskSubmissionStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
    write_lock: Mutex<()>,
}

impl DiskSubmissionStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path.join("submissions"))
            .open()
            .with_context(|| format!("Failed to open submission store at {}", path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION, PartitionCreateOptions::default())
            .context("Failed to open submissions partition")?;

        Ok(Self {
            keyspace,
            partition,
            write_lock: Mutex::new(()),
        })
    }

    fn next_sequence(&self) -> Result<u64> {
        let last = self
            .partition
            .last_key_value()?
            .and_then(|(key, _)| <[u8; 8]>::try_from(&key[..]).ok())
            .map(u64::from_be_bytes)
            .unwrap_or(0);
        Ok(last + 1)
    }
}

#[async_trait]
impl SubmissionStore for DiskSubmissionStore {
    async fn save(&self, form: &ContactForm) -> Result<String> {
        let _guard = self.write_lock.lock().await;

        let sequence = self.next_sequence()?;
        let submission = StoredSubmission {
            reference: reference_for(sequence),
            submitted_at: Utc::now(),
            form: form.clone(),
        };

        self.partition
            .insert(sequence.to_be_bytes().to_vec(), serde_json::to_vec(&submission)?)
            .context("Failed to write submission")?;
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to flush submission store")?;

        debug!(reference = %submission.reference, "Stored submission");
        Ok(submission.reference)
    }

    async fn list(&self) -> Result<Vec<StoredSubmission>> {
        self.partition
            .iter()
            .map(|item| {
                let (_, value) = item?;
                serde_json::from_slice(&value).context("Failed to decode stored submission")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn form(name: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            subject: "Dissertation proposal".to_string(),
            message: "Looking for help with the literature review.".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let dir = tempdir().unwrap();
        let store = DiskSubmissionStore::open(dir.path()).unwrap();

        assert!(store.list().await.unwrap().is_empty());

        let first = store.save(&form("Nadia")).await.unwrap();
        let second = store.save(&form("Tom")).await.unwrap();
        assert_eq!(first, "Q-000001");
        assert_eq!(second, "Q-000002");

        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].form.name, "Nadia");
        assert_eq!(stored[1].reference, "Q-000002");
    }

    #[tokio::test]
    async fn test_submissions_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let store = DiskSubmissionStore::open(dir.path()).unwrap();
            store.save(&form("Nadia")).await.unwrap();
        }

        let store = DiskSubmissionStore::open(dir.path()).unwrap();
        assert_eq!(store.save(&form("Tom")).await.unwrap(), "Q-000002");
        assert_eq!(store.list().await.unwrap().len(), 2);
    }
}
